//! Income business logic - Records, edits and removes sales.
//!
//! A sale stores only the product id, the quantity and the day it happened. The
//! product must exist when the sale is recorded or edited; it may be deleted later.

use crate::{
    entities::{Income, Product, income},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{Set, prelude::*};
use tracing::info;

fn validate_quantity(quantity: i64) -> Result<i64> {
    if quantity < 1 {
        return Err(Error::InvalidQuantity { quantity });
    }
    Ok(quantity)
}

async fn ensure_product_exists(db: &DatabaseConnection, product_id: i64) -> Result<()> {
    Product::find_by_id(product_id)
        .one(db)
        .await?
        .map(|_| ())
        .ok_or(Error::ProductNotFound { id: product_id })
}

/// Retrieves a sale by its unique ID.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_income_by_id(
    db: &DatabaseConnection,
    income_id: i64,
) -> Result<Option<income::Model>> {
    Income::find_by_id(income_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Records a sale of `quantity` units of a product on `date`.
///
/// # Errors
/// Returns an error if:
/// - The quantity is below one
/// - The product does not exist
/// - The database insert operation fails
pub async fn create_income(
    db: &DatabaseConnection,
    product_id: i64,
    quantity: i64,
    date: NaiveDate,
) -> Result<income::Model> {
    let quantity = validate_quantity(quantity)?;
    ensure_product_exists(db, product_id).await?;

    let sale = income::ActiveModel {
        product_id: Set(product_id),
        quantity: Set(quantity),
        date: Set(date),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!(income_id = sale.id, product_id, quantity, %date, "Sale recorded");
    Ok(sale)
}

/// Replaces every field of an existing sale.
///
/// # Errors
/// Returns an error if the quantity is invalid, the sale or the new product
/// does not exist, or the database update fails.
pub async fn update_income(
    db: &DatabaseConnection,
    income_id: i64,
    product_id: i64,
    quantity: i64,
    date: NaiveDate,
) -> Result<income::Model> {
    let quantity = validate_quantity(quantity)?;

    let mut sale: income::ActiveModel = Income::find_by_id(income_id)
        .one(db)
        .await?
        .ok_or(Error::IncomeNotFound { id: income_id })?
        .into();

    ensure_product_exists(db, product_id).await?;

    sale.product_id = Set(product_id);
    sale.quantity = Set(quantity);
    sale.date = Set(date);

    let updated = sale.update(db).await?;
    info!(income_id, "Sale updated");
    Ok(updated)
}

/// Removes a sale.
///
/// # Errors
/// Returns an error if the sale does not exist or the delete fails.
pub async fn delete_income(db: &DatabaseConnection, income_id: i64) -> Result<()> {
    let result = Income::delete_by_id(income_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::IncomeNotFound { id: income_id });
    }
    info!(income_id, "Sale removed");
    Ok(())
}
