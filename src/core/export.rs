//! Workbook export.
//!
//! Writes a single `.xlsx` workbook with one worksheet per table. Each sheet starts
//! with its header row, even when the table is empty, and the income sheet uses the
//! enriched sale shape rather than the stored row. The workbook is overwritten on
//! every export.

use crate::{core::ledger::LedgerSnapshot, errors::Result};
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// File name of the workbook inside the export directory
pub const WORKBOOK_FILE: &str = "pos_ledger.xlsx";

/// Worksheet holding products
pub const PRODUCTS_SHEET: &str = "Products";
/// Worksheet holding priced sales
pub const INCOME_SHEET: &str = "Income";
/// Worksheet holding expenses
pub const EXPENSES_SHEET: &str = "Expenses";

const PRODUCT_HEADERS: [&str; 3] = ["id", "name", "price"];
const INCOME_HEADERS: [&str; 5] = ["date", "name", "quantity", "price", "total"];
const EXPENSE_HEADERS: [&str; 4] = ["id", "item", "amount", "date"];

/// One cell of a worksheet.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Text, including ISO dates
    Text(String),
    /// Ids, quantities and money
    Number(f64),
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Cell {
    // Row ids and quantities stay far below 2^53.
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

/// A named worksheet: header row followed by data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    /// Worksheet tab name
    pub name: &'static str,
    /// Column headers, always written as the first row
    pub headers: &'static [&'static str],
    /// Data rows in table order
    pub rows: Vec<Vec<Cell>>,
}

/// What an export wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Path of the workbook file
    pub path: PathBuf,
    /// Rows in the products sheet
    pub products: usize,
    /// Rows in the income sheet
    pub income: usize,
    /// Rows in the expenses sheet
    pub expenses: usize,
}

/// Lays the snapshot out as the Products, Income and Expenses sheets.
#[must_use]
pub fn build_sheets(snapshot: &LedgerSnapshot) -> [Sheet; 3] {
    let products = snapshot
        .products
        .iter()
        .map(|p| vec![p.id.into(), p.name.as_str().into(), p.price.into()])
        .collect();

    let income = snapshot
        .income
        .iter()
        .map(|sale| {
            vec![
                sale.date.to_string().as_str().into(),
                sale.name.as_str().into(),
                sale.quantity.into(),
                sale.price.into(),
                sale.total.into(),
            ]
        })
        .collect();

    let expenses = snapshot
        .expenses
        .iter()
        .map(|e| {
            vec![
                e.id.into(),
                e.item.as_str().into(),
                e.amount.into(),
                e.date.to_string().as_str().into(),
            ]
        })
        .collect();

    [
        Sheet {
            name: PRODUCTS_SHEET,
            headers: &PRODUCT_HEADERS,
            rows: products,
        },
        Sheet {
            name: INCOME_SHEET,
            headers: &INCOME_HEADERS,
            rows: income,
        },
        Sheet {
            name: EXPENSES_SHEET,
            headers: &EXPENSE_HEADERS,
            rows: expenses,
        },
    ]
}

/// Renders sheets into an in-memory workbook.
pub fn build_workbook(sheets: &[Sheet]) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.name)?;

        for (col, header) in (0u16..).zip(sheet.headers) {
            worksheet.write_string(0, col, *header)?;
        }
        for (row, cells) in (1u32..).zip(&sheet.rows) {
            for (col, cell) in (0u16..).zip(cells) {
                match cell {
                    Cell::Text(text) => worksheet.write_string(row, col, text)?,
                    Cell::Number(number) => worksheet.write_number(row, col, *number)?,
                };
            }
        }
    }
    Ok(workbook)
}

/// Writes the workbook to `dir`/[`WORKBOOK_FILE`], creating the directory if needed.
///
/// # Errors
/// Returns an error if the directory cannot be created or the workbook cannot be saved.
#[instrument(skip(snapshot))]
pub fn export_workbook(snapshot: &LedgerSnapshot, dir: &Path) -> Result<ExportSummary> {
    std::fs::create_dir_all(dir)?;

    let sheets = build_sheets(snapshot);
    let mut workbook = build_workbook(&sheets)?;
    let path = dir.join(WORKBOOK_FILE);
    workbook.save(&path)?;

    let [products, income, expenses] = &sheets;
    let summary = ExportSummary {
        path,
        products: products.rows.len(),
        income: income.rows.len(),
        expenses: expenses.rows.len(),
    };
    info!(
        products = summary.products,
        income = summary.income,
        expenses = summary.expenses,
        "Ledger exported"
    );
    Ok(summary)
}
