//! Report formatting.
//!
//! This module turns cashflow results and ledger rows into plain text: money with a
//! currency symbol and thousands separators, month labels, and fixed-width tables.
//! All functions are framework-agnostic and return `String`s for the CLI to print;
//! the table builders propagate `fmt` write failures instead of dropping them.

use crate::{
    core::{
        cashflow::{CashflowSummary, TrendBucket},
        ledger::SaleRecord,
    },
    entities::{expense, product},
    errors::Result,
};
use chrono::NaiveDate;
use std::fmt::Write;

/// Formats a money value rounded to whole units, e.g. `₦1,250` or `-₦30`.
#[must_use]
pub fn format_money(amount: f64, symbol: &str) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    // Display of a rounded float has no fractional part.
    let digits = format!("{:.0}", rounded.abs());
    format!("{sign}{symbol}{}", group_thousands(&digits))
}

/// Formats a unit price with two decimals, e.g. `₦1,250.50`.
#[must_use]
pub fn format_price(amount: f64, symbol: &str) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{sign}{symbol}{}.{fraction}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Short month label like `2024-01`.
#[must_use]
pub fn format_month(month: NaiveDate) -> String {
    month.format("%Y-%m").to_string()
}

/// The three metric cards shown at the top of the dashboard.
pub fn format_metric_cards(summary: &CashflowSummary, symbol: &str) -> Result<String> {
    let cards = [
        ("Income", summary.total_income),
        ("Expenses", summary.total_expenses),
        ("Profit", summary.profit),
    ];

    let mut out = String::new();
    for (label, value) in cards {
        writeln!(out, "{label:<10}{:>16}", format_money(value, symbol))?;
    }
    Ok(out)
}

/// Month-by-month trend table with Income, Expenses and Profit columns.
pub fn format_trend_table(trend: &[TrendBucket], symbol: &str) -> Result<String> {
    let mut out = format!(
        "{:<9}{:>16}{:>16}{:>16}\n",
        "Month", "Income", "Expenses", "Profit"
    );
    for bucket in trend {
        writeln!(
            out,
            "{:<9}{:>16}{:>16}{:>16}",
            format_month(bucket.month),
            format_money(bucket.income, symbol),
            format_money(bucket.expenses, symbol),
            format_money(bucket.profit, symbol),
        )?;
    }
    Ok(out)
}

/// Product list table.
pub fn format_products_table(products: &[product::Model], symbol: &str) -> Result<String> {
    let mut out = format!("{:>5}  {:<30}{:>16}\n", "ID", "Name", "Price");
    for product in products {
        writeln!(
            out,
            "{:>5}  {:<30}{:>16}",
            product.id,
            product.name,
            format_price(product.price, symbol)
        )?;
    }
    Ok(out)
}

/// Sales table using the enriched sale shape.
pub fn format_sales_table(sales: &[SaleRecord], symbol: &str) -> Result<String> {
    let mut out = format!(
        "{:>5}  {:<12}{:<24}{:>6}{:>16}{:>16}\n",
        "ID", "Date", "Name", "Qty", "Price", "Total"
    );
    for sale in sales {
        writeln!(
            out,
            "{:>5}  {:<12}{:<24}{:>6}{:>16}{:>16}",
            sale.id,
            sale.date.to_string(),
            sale.name,
            sale.quantity,
            format_price(sale.price, symbol),
            format_price(sale.total, symbol),
        )?;
    }
    Ok(out)
}

/// Expense list table.
pub fn format_expenses_table(expenses: &[expense::Model], symbol: &str) -> Result<String> {
    let mut out = format!(
        "{:>5}  {:<12}{:<30}{:>16}\n",
        "ID", "Date", "Item", "Amount"
    );
    for expense in expenses {
        writeln!(
            out,
            "{:>5}  {:<12}{:<30}{:>16}",
            expense.id,
            expense.date.to_string(),
            expense.item,
            format_price(expense.amount, symbol)
        )?;
    }
    Ok(out)
}
