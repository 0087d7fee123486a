//! Products view - add, list, edit and remove products and services.

use crate::{
    cli::AppContext,
    core::{ledger, product, report::format_products_table},
    errors::Result,
};
use clap::Subcommand;
use tracing::debug;

/// Product actions.
#[derive(Debug, Subcommand)]
pub enum ProductCommand {
    /// Add a product or service
    Add {
        /// Product name; a blank name saves nothing
        #[arg(long, default_value = "")]
        name: String,
        /// Unit price
        #[arg(long, default_value_t = 0.0)]
        price: f64,
    },
    /// Show every product
    List,
    /// Change a product's name and price
    Edit {
        /// Product to change
        #[arg(long)]
        id: i64,
        /// New name
        #[arg(long)]
        name: String,
        /// New unit price
        #[arg(long)]
        price: f64,
    },
    /// Delete a product; its past sales stay recorded but drop out of listings
    Remove {
        /// Product to delete
        #[arg(long)]
        id: i64,
    },
}

/// Runs a product action.
pub async fn run(ctx: &AppContext, command: ProductCommand) -> Result<String> {
    let db = &ctx.database;
    match command {
        ProductCommand::Add { name, price } => {
            if name.trim().is_empty() {
                debug!("Ignoring product form without a name");
                return Ok(String::new());
            }
            let product = product::create_product(db, &name, price).await?;
            Ok(format!("Added product #{} {}\n", product.id, product.name))
        }
        ProductCommand::List => {
            let products = ledger::list_products(db).await?;
            format_products_table(&products, ctx.symbol())
        }
        ProductCommand::Edit { id, name, price } => {
            let product = product::update_product(db, id, &name, price).await?;
            Ok(format!("Updated product #{} {}\n", product.id, product.name))
        }
        ProductCommand::Remove { id } => {
            product::delete_product(db, id).await?;
            Ok(format!("Removed product #{id}\n"))
        }
    }
}
