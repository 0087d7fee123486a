//! Unified error type for the ledger.
//!
//! Every fallible operation in the crate returns [`Result`]. Storage, I/O, workbook
//! and text formatting failures convert automatically; validation failures carry the
//! offending value.

use thiserror::Error;

/// All errors the ledger can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// Underlying database failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// File system failure (export, config)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure while building or saving the export workbook
    #[error("Workbook error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Failure while writing report text
    #[error("Format error: {0}")]
    Format(#[from] std::fmt::Error),

    /// A price or amount was negative or not finite
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// A sale quantity was below one
    #[error("Invalid quantity: {quantity} (must be at least 1)")]
    InvalidQuantity {
        /// The rejected quantity
        quantity: i64,
    },

    /// A required text field was empty or whitespace-only
    #[error("Missing required field: {field}")]
    MissingField {
        /// Name of the field
        field: &'static str,
    },

    /// No product with this id exists
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// The requested product id
        id: i64,
    },

    /// No income entry with this id exists
    #[error("Sale not found: {id}")]
    IncomeNotFound {
        /// The requested income id
        id: i64,
    },

    /// No expense entry with this id exists
    #[error("Expense not found: {id}")]
    ExpenseNotFound {
        /// The requested expense id
        id: i64,
    },
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
