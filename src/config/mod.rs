/// Application settings from `ledger.toml`
pub mod app;

/// Database connection and table creation
pub mod database;
