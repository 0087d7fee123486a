//! View implementations, one module per view.

/// Totals and monthly trend
pub mod dashboard;
/// Expense form and list
pub mod expense;
/// CSV workbook export
pub mod export;
/// Product form and list
pub mod product;
/// Quick sale form and list
pub mod sale;

pub use dashboard::DashboardArgs;
pub use expense::ExpenseCommand;
pub use export::ExportArgs;
pub use product::ProductCommand;
pub use sale::SaleCommand;

use chrono::{Local, NaiveDate};

/// Date used when a form leaves the date empty.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}
