//! Read side of the ledger.
//!
//! Every accessor returns owned rows ordered by id. Sales are joined against their
//! product so each record carries the product name, the product's *current* price and
//! the line total derived from it. Sales whose product has since been deleted are
//! dropped from the joined view.

use crate::{
    core::cashflow::{self, Cashflow, CashflowEntry, DateRange},
    entities::{Expense, Income, Product, expense, income, product},
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, prelude::*};
use serde::Serialize;
use tracing::debug;

/// A sale joined with its product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleRecord {
    /// Income row id
    pub id: i64,
    /// Day of the sale
    pub date: NaiveDate,
    /// Product sold
    pub product_id: i64,
    /// Product name at read time
    pub name: String,
    /// Units sold
    pub quantity: i64,
    /// Product price at read time
    pub price: f64,
    /// `quantity * price`
    pub total: f64,
}

impl SaleRecord {
    /// Prices a sale from the product's current price.
    #[must_use]
    pub fn priced(sale: income::Model, product: product::Model) -> Self {
        // Quantities are small counts; precision loss would need more than 2^53 units.
        #[allow(clippy::cast_precision_loss)]
        let total = sale.quantity as f64 * product.price;
        Self {
            id: sale.id,
            date: sale.date,
            product_id: product.id,
            name: product.name,
            quantity: sale.quantity,
            price: product.price,
            total,
        }
    }
}

impl CashflowEntry for SaleRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn amount(&self) -> f64 {
        self.total
    }
}

/// All three tables read at one point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerSnapshot {
    /// Products by id
    pub products: Vec<product::Model>,
    /// Priced sales by id, orphans excluded
    pub income: Vec<SaleRecord>,
    /// Expenses by id
    pub expenses: Vec<expense::Model>,
}

impl LedgerSnapshot {
    /// True when there is neither income nor expense data to report on.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.expenses.is_empty()
    }

    /// Earliest and latest dated entry, used as the default report range.
    #[must_use]
    pub fn bounds(&self) -> Option<DateRange> {
        cashflow::data_bounds(&self.income, &self.expenses)
    }

    /// Aggregates this snapshot over `start..=end`.
    #[must_use]
    pub fn cashflow(&self, start: NaiveDate, end: NaiveDate) -> Cashflow {
        cashflow::aggregate(&self.income, &self.expenses, start, end)
    }
}

/// Lists every product, ordered by id.
pub async fn list_products(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    Product::find()
        .order_by_asc(product::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Lists every sale that still has a product, priced at the product's current price.
pub async fn list_income(db: &DatabaseConnection) -> Result<Vec<SaleRecord>> {
    let rows = Income::find()
        .find_also_related(Product)
        .order_by_asc(income::Column::Id)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(sale, product)| match product {
            Some(product) => Some(SaleRecord::priced(sale, product)),
            None => {
                debug!(
                    income_id = sale.id,
                    product_id = sale.product_id,
                    "Skipping sale whose product no longer exists"
                );
                None
            }
        })
        .collect())
}

/// Lists every expense, ordered by id.
pub async fn list_expenses(db: &DatabaseConnection) -> Result<Vec<expense::Model>> {
    Expense::find()
        .order_by_asc(expense::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Reads all three tables.
pub async fn snapshot(db: &DatabaseConnection) -> Result<LedgerSnapshot> {
    Ok(LedgerSnapshot {
        products: list_products(db).await?,
        income: list_income(db).await?,
        expenses: list_expenses(db).await?,
    })
}
