//! Expenses view - record, list, edit and remove expenses.

use crate::{
    cli::{AppContext, commands::today},
    core::{expense, ledger, report::format_expenses_table},
    errors::Result,
};
use chrono::NaiveDate;
use clap::Subcommand;
use tracing::debug;

/// Expense actions.
#[derive(Debug, Subcommand)]
pub enum ExpenseCommand {
    /// Record an expense
    Add {
        /// What the money was spent on; a blank item saves nothing
        #[arg(long, default_value = "")]
        item: String,
        /// Amount paid
        #[arg(long, default_value_t = 0.0)]
        amount: f64,
        /// Day of the expense (YYYY-MM-DD), today if omitted
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show every expense
    List,
    /// Replace an expense's fields
    Edit {
        /// Expense to change
        #[arg(long)]
        id: i64,
        /// New item
        #[arg(long)]
        item: String,
        /// New amount
        #[arg(long)]
        amount: f64,
        /// New day (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
    },
    /// Delete an expense
    Remove {
        /// Expense to delete
        #[arg(long)]
        id: i64,
    },
}

/// Runs an expense action.
pub async fn run(ctx: &AppContext, command: ExpenseCommand) -> Result<String> {
    let db = &ctx.database;
    match command {
        ExpenseCommand::Add { item, amount, date } => {
            if item.trim().is_empty() {
                debug!("Ignoring expense form without an item");
                return Ok(String::new());
            }
            let date = date.unwrap_or_else(today);
            let expense = expense::create_expense(db, &item, amount, date).await?;
            Ok(format!("Expense #{} saved\n", expense.id))
        }
        ExpenseCommand::List => {
            let expenses = ledger::list_expenses(db).await?;
            format_expenses_table(&expenses, ctx.symbol())
        }
        ExpenseCommand::Edit {
            id,
            item,
            amount,
            date,
        } => {
            let expense = expense::update_expense(db, id, &item, amount, date).await?;
            Ok(format!("Updated expense #{}\n", expense.id))
        }
        ExpenseCommand::Remove { id } => {
            expense::delete_expense(db, id).await?;
            Ok(format!("Removed expense #{id}\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_add_expense_defaults_to_today() -> Result<()> {
        let ctx = setup_test_context().await?;

        let out = run(
            &ctx,
            ExpenseCommand::Add {
                item: "Fuel".to_string(),
                amount: 20.0,
                date: None,
            },
        )
        .await?;
        assert_eq!(out, "Expense #1 saved\n");

        let expenses = ledger::list_expenses(&ctx.database).await?;
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].date, today());
        assert_eq!(expenses[0].amount, 20.0);
        Ok(())
    }

    #[tokio::test]
    async fn test_add_expense_without_item_is_ignored() -> Result<()> {
        let ctx = setup_test_context().await?;

        let out = run(
            &ctx,
            ExpenseCommand::Add {
                item: String::new(),
                amount: 20.0,
                date: Some(date(2024, 1, 1)),
            },
        )
        .await?;

        assert!(out.is_empty());
        assert!(ledger::list_expenses(&ctx.database).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_edit_and_list_expense() -> Result<()> {
        let ctx = setup_test_context().await?;
        let expense = create_test_expense(&ctx.database, "Fuel", 20.0, date(2024, 1, 3)).await?;

        run(
            &ctx,
            ExpenseCommand::Edit {
                id: expense.id,
                item: "Generator fuel".to_string(),
                amount: 2500.0,
                date: date(2024, 1, 4),
            },
        )
        .await?;

        let out = run(&ctx, ExpenseCommand::List).await?;
        assert!(out.contains("Generator fuel"));
        assert!(out.contains("2024-01-04"));
        assert!(out.contains("₦2,500.00"));
        Ok(())
    }
}
