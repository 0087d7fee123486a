//! Shared test utilities for the ledger.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test rows with sensible defaults.

#![allow(clippy::expect_used)]

use crate::{
    cli::AppContext,
    config::app::AppConfig,
    core::{expense, income, product},
    entities,
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Shorthand for a valid calendar date.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Creates a test product priced at 10.0.
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::product::Model> {
    product::create_product(db, name, 10.0).await
}

/// Creates a test product with a custom price.
pub async fn create_custom_product(
    db: &DatabaseConnection,
    name: &str,
    price: f64,
) -> Result<entities::product::Model> {
    product::create_product(db, name, price).await
}

/// Records a sale of `quantity` units dated 2024-01-15.
pub async fn create_test_sale(
    db: &DatabaseConnection,
    product_id: i64,
    quantity: i64,
) -> Result<entities::income::Model> {
    income::create_income(db, product_id, quantity, date(2024, 1, 15)).await
}

/// Records an expense.
pub async fn create_test_expense(
    db: &DatabaseConnection,
    item: &str,
    amount: f64,
    date: NaiveDate,
) -> Result<entities::expense::Model> {
    expense::create_expense(db, item, amount, date).await
}

/// Sets up a complete test environment with one product.
/// Returns (db, product) for sale-related tests.
pub async fn setup_with_product() -> Result<(DatabaseConnection, entities::product::Model)> {
    let db = setup_test_db().await?;
    let product = create_test_product(&db, "Test Product").await?;
    Ok((db, product))
}

/// Sets up a view context over a fresh in-memory database with default settings.
pub async fn setup_test_context() -> Result<AppContext> {
    let db = setup_test_db().await?;
    Ok(AppContext::new(db, AppConfig::default()))
}
