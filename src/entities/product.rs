//! Product entity - Represents an item or service offered for sale.
//!
//! Sales reference products by id and always price themselves from the product's
//! current price, so editing a price changes the totals of past sales too.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name (e.g., "Haircut", "Bottled Water")
    pub name: String,
    /// Unit price, never negative
    pub price: f64,
}

/// Products own no relations; sales point at them without a database-level foreign key
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
