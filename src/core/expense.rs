//! Expense business logic - Records, edits and removes expenses.

use crate::{
    core::{non_negative_amount, required_text},
    entities::{Expense, expense},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{Set, prelude::*};
use tracing::info;

/// Retrieves an expense by its unique ID.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_expense_by_id(
    db: &DatabaseConnection,
    expense_id: i64,
) -> Result<Option<expense::Model>> {
    Expense::find_by_id(expense_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Records an expense.
///
/// # Errors
/// Returns an error if the item is blank, the amount is negative or not finite,
/// or the database insert operation fails.
pub async fn create_expense(
    db: &DatabaseConnection,
    item: &str,
    amount: f64,
    date: NaiveDate,
) -> Result<expense::Model> {
    let item = required_text(item, "item")?;
    let amount = non_negative_amount(amount)?;

    let expense = expense::ActiveModel {
        item: Set(item),
        amount: Set(amount),
        date: Set(date),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!(expense_id = expense.id, item = %expense.item, %date, "Expense recorded");
    Ok(expense)
}

/// Replaces every field of an existing expense.
///
/// # Errors
/// Returns an error if the input is invalid, the expense does not exist,
/// or the database update fails.
pub async fn update_expense(
    db: &DatabaseConnection,
    expense_id: i64,
    item: &str,
    amount: f64,
    date: NaiveDate,
) -> Result<expense::Model> {
    let item = required_text(item, "item")?;
    let amount = non_negative_amount(amount)?;

    let mut expense: expense::ActiveModel = Expense::find_by_id(expense_id)
        .one(db)
        .await?
        .ok_or(Error::ExpenseNotFound { id: expense_id })?
        .into();

    expense.item = Set(item);
    expense.amount = Set(amount);
    expense.date = Set(date);

    let updated = expense.update(db).await?;
    info!(expense_id, "Expense updated");
    Ok(updated)
}

/// Removes an expense.
///
/// # Errors
/// Returns an error if the expense does not exist or the delete fails.
pub async fn delete_expense(db: &DatabaseConnection, expense_id: i64) -> Result<()> {
    let result = Expense::delete_by_id(expense_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::ExpenseNotFound { id: expense_id });
    }
    info!(expense_id, "Expense removed");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_expense_integration() -> Result<()> {
        let db = setup_test_db().await?;

        let expense = create_expense(&db, " Rent ", 30000.0, date(2024, 2, 1)).await?;

        assert_eq!(expense.item, "Rent");
        assert_eq!(expense.amount, 30000.0);
        assert_eq!(expense.date, date(2024, 2, 1));
        assert_eq!(get_expense_by_id(&db, expense.id).await?, Some(expense));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_expense_validation() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_expense(&db, "", 10.0, date(2024, 2, 1)).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::MissingField { field: "item" }
        ));

        let result = create_expense(&db, "Fuel", -5.0, date(2024, 2, 1)).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidAmount { amount: -5.0 }
        ));

        assert!(Expense::find().all(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_update_expense_integration() -> Result<()> {
        let db = setup_test_db().await?;
        let expense = create_test_expense(&db, "Fuel", 20.0, date(2024, 1, 3)).await?;

        let updated = update_expense(&db, expense.id, "Diesel", 25.0, date(2024, 1, 4)).await?;
        assert_eq!(updated.id, expense.id);
        assert_eq!(updated.item, "Diesel");
        assert_eq!(updated.amount, 25.0);
        assert_eq!(updated.date, date(2024, 1, 4));

        let result = update_expense(&db, 999, "Diesel", 25.0, date(2024, 1, 4)).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::ExpenseNotFound { id: 999 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_expense() -> Result<()> {
        let db = setup_test_db().await?;
        let expense = create_test_expense(&db, "Fuel", 20.0, date(2024, 1, 3)).await?;

        delete_expense(&db, expense.id).await?;
        assert!(get_expense_by_id(&db, expense.id).await?.is_none());

        let result = delete_expense(&db, expense.id).await;
        assert!(matches!(result.unwrap_err(), Error::ExpenseNotFound { .. }));

        Ok(())
    }
}
