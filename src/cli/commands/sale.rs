//! Sales view - quick sale form plus listing and corrections.

use crate::{
    cli::{AppContext, commands::today},
    core::{income, ledger, report::format_sales_table},
    errors::Result,
};
use chrono::NaiveDate;
use clap::Subcommand;

/// Message shown when a sale is attempted before any product exists
pub const NO_PRODUCTS_MESSAGE: &str = "Add products first";

/// Sale actions.
#[derive(Debug, Subcommand)]
pub enum SaleCommand {
    /// Complete a sale
    Record {
        /// Product sold
        #[arg(long)]
        product: i64,
        /// Units sold
        #[arg(long, default_value_t = 1)]
        quantity: i64,
        /// Day of the sale (YYYY-MM-DD), today if omitted
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show every sale with its current price and total
    List,
    /// Replace a sale's fields
    Edit {
        /// Sale to change
        #[arg(long)]
        id: i64,
        /// Product sold
        #[arg(long)]
        product: i64,
        /// Units sold
        #[arg(long)]
        quantity: i64,
        /// Day of the sale (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
    },
    /// Delete a sale
    Remove {
        /// Sale to delete
        #[arg(long)]
        id: i64,
    },
}

/// Runs a sale action.
pub async fn run(ctx: &AppContext, command: SaleCommand) -> Result<String> {
    let db = &ctx.database;
    match command {
        SaleCommand::Record {
            product,
            quantity,
            date,
        } => {
            if ledger::list_products(db).await?.is_empty() {
                return Ok(format!("{NO_PRODUCTS_MESSAGE}\n"));
            }
            let date = date.unwrap_or_else(today);
            let sale = income::create_income(db, product, quantity, date).await?;
            Ok(format!("Sale #{} recorded\n", sale.id))
        }
        SaleCommand::List => {
            let sales = ledger::list_income(db).await?;
            format_sales_table(&sales, ctx.symbol())
        }
        SaleCommand::Edit {
            id,
            product,
            quantity,
            date,
        } => {
            let sale = income::update_income(db, id, product, quantity, date).await?;
            Ok(format!("Updated sale #{}\n", sale.id))
        }
        SaleCommand::Remove { id } => {
            income::delete_income(db, id).await?;
            Ok(format!("Removed sale #{id}\n"))
        }
    }
}
