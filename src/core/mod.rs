//! Core business logic - framework-agnostic ledger operations.
//!
//! Store modules (`product`, `income`, `expense`) write and look up single rows,
//! `ledger` reads whole tables as snapshots, `cashflow` aggregates those snapshots,
//! and `report` / `export` turn results into text and CSV sheets.

/// Cashflow totals and month-bucketed trend series
pub mod cashflow;
/// Expense store operations
pub mod expense;
/// CSV workbook export
pub mod export;
/// Income (sale) store operations
pub mod income;
/// Read-side queries and enriched sale records
pub mod ledger;
/// Product store operations
pub mod product;
/// Text formatting for money, months and tables
pub mod report;

use crate::errors::{Error, Result};

/// Trims a required text field, rejecting blank input.
pub(crate) fn required_text(value: &str, field: &'static str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::MissingField { field });
    }
    Ok(trimmed.to_string())
}

/// Rejects negative, NaN and infinite money values.
pub(crate) fn non_negative_amount(amount: f64) -> Result<f64> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::InvalidAmount { amount });
    }
    Ok(amount)
}
