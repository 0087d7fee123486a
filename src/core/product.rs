//! Product business logic - Handles product creation, lookup, edits and removal.
//!
//! Product names are trimmed and must not be blank, prices must be finite and
//! non-negative. Removing a product is a hard delete and leaves any sales that
//! reference it untouched; those sales simply drop out of the joined views.

use crate::{
    core::{non_negative_amount, required_text},
    entities::{Product, product},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};
use tracing::info;

/// Retrieves a specific product by its unique ID.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_product_by_id(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Option<product::Model>> {
    Product::find_by_id(product_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new product, performing input validation.
///
/// # Errors
/// Returns an error if:
/// - The product name is empty or whitespace-only
/// - The price is negative or not finite (NaN, infinity)
/// - The database insert operation fails
pub async fn create_product(
    db: &DatabaseConnection,
    name: &str,
    price: f64,
) -> Result<product::Model> {
    let name = required_text(name, "name")?;
    let price = non_negative_amount(price)?;

    let product = product::ActiveModel {
        name: Set(name),
        price: Set(price),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!(product_id = product.id, name = %product.name, "Product added");
    Ok(product)
}

/// Replaces a product's name and price.
///
/// Past sales of this product are priced from the new value from now on.
///
/// # Errors
/// Returns an error if the input is invalid, the product does not exist,
/// or the database update fails.
pub async fn update_product(
    db: &DatabaseConnection,
    product_id: i64,
    new_name: &str,
    new_price: f64,
) -> Result<product::Model> {
    let new_name = required_text(new_name, "name")?;
    let new_price = non_negative_amount(new_price)?;

    let mut product: product::ActiveModel = Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::ProductNotFound { id: product_id })?
        .into();

    product.name = Set(new_name);
    product.price = Set(new_price);

    let updated = product.update(db).await?;
    info!(product_id, "Product updated");
    Ok(updated)
}

/// Deletes a product. Sales that reference it are kept.
///
/// # Errors
/// Returns an error if the product does not exist or the delete fails.
pub async fn delete_product(db: &DatabaseConnection, product_id: i64) -> Result<()> {
    let result = Product::delete_by_id(product_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::ProductNotFound { id: product_id });
    }
    info!(product_id, "Product removed");
    Ok(())
}
