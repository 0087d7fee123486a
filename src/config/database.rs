//! Database configuration module for the ledger.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the on-disk schema always matches the Rust structs without hand-written SQL.

use crate::entities::{Expense, Income, Product};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};
use tracing::{debug, info, instrument};

/// Connection string used when nothing else is configured.
/// `mode=rwc` lets `SQLite` create the file on first run.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://pos_ledger.sqlite?mode=rwc";

/// Resolves the database URL.
///
/// An explicit override (the `--database-url` flag) wins, then the `DATABASE_URL`
/// environment variable, then the value from the config file, then
/// [`DEFAULT_DATABASE_URL`].
#[must_use]
pub fn resolve_database_url(cli_override: Option<&str>, config_value: Option<&str>) -> String {
    cli_override
        .map(str::to_string)
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .or_else(|| config_value.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
}

/// Opens the ledger database and makes sure all tables exist.
///
/// The returned connection is the single store handle for the whole process and is
/// passed explicitly to every operation that touches persistence.
#[instrument]
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Connecting to ledger database");
    let db = Database::connect(database_url).await?;
    create_tables(&db).await?;
    info!("Ledger database ready");
    Ok(db)
}

/// Creates the `products`, `income` and `expenses` tables if they are absent.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    create_table_if_not_exists(db, Product).await?;
    create_table_if_not_exists(db, Income).await?;
    create_table_if_not_exists(db, Expense).await?;
    Ok(())
}

async fn create_table_if_not_exists<E>(db: &DatabaseConnection, entity: E) -> Result<()>
where
    E: EntityTrait,
{
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut table = schema.create_table_from_entity(entity);
    table.if_not_exists();
    db.execute(builder.build(&table)).await?;
    Ok(())
}
