//! Command line interface - the five ledger views and their shared context.
//!
//! Each view returns the text it wants printed so that it can be exercised in tests
//! without capturing stdout.

/// View implementations (dashboard, products, sales, expenses, export)
pub mod commands;

use crate::{config::app::AppConfig, errors::Result};
use clap::{Parser, Subcommand};
use sea_orm::DatabaseConnection;
use std::path::PathBuf;

pub use commands::{
    DashboardArgs, ExpenseCommand, ExportArgs, ProductCommand, SaleCommand,
};

/// Shared data available to every view.
pub struct AppContext {
    /// Store handle opened once at startup
    pub database: DatabaseConnection,
    /// Loaded application settings
    pub config: AppConfig,
}

impl AppContext {
    /// Bundles the store handle with the settings.
    #[must_use]
    pub const fn new(database: DatabaseConnection, config: AppConfig) -> Self {
        Self { database, config }
    }

    /// Currency symbol used by every view.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.config.currency_symbol
    }
}

/// Point-of-sale ledger: products, sales, expenses and a cashflow dashboard.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./ledger.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Database URL, overriding DATABASE_URL and the config file
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    /// View to open
    #[command(subcommand)]
    pub command: Command,
}

/// The five views.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Income, expenses, profit and the monthly cashflow trend
    Dashboard(DashboardArgs),
    /// Manage products and services
    #[command(subcommand)]
    Products(ProductCommand),
    /// Record and manage sales
    #[command(subcommand)]
    Sales(SaleCommand),
    /// Record and manage expenses
    #[command(subcommand)]
    Expenses(ExpenseCommand),
    /// Write every table to CSV sheets
    Export(ExportArgs),
}

/// Dispatches a parsed command to its view.
pub async fn run(ctx: &AppContext, command: Command) -> Result<String> {
    match command {
        Command::Dashboard(args) => commands::dashboard::dashboard(ctx, &args).await,
        Command::Products(cmd) => commands::product::run(ctx, cmd).await,
        Command::Sales(cmd) => commands::sale::run(ctx, cmd).await,
        Command::Expenses(cmd) => commands::expense::run(ctx, cmd).await,
        Command::Export(args) => commands::export::export(ctx, &args).await,
    }
}
