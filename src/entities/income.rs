//! Income entity - A recorded sale of some quantity of a product on a given day.
//!
//! Only the product reference, quantity and date are stored. Name, unit price and
//! line total are derived by joining against `products` when the ledger is read.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Income database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "income")]
pub struct Model {
    /// Unique identifier for the sale
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the product sold; may dangle if the product was deleted later
    pub product_id: i64,
    /// Units sold, at least 1
    pub quantity: i64,
    /// Calendar day of the sale
    pub date: Date,
}

// The product link is declared through `Related` only. Listing it in `Relation`
// would make schema generation emit a foreign key, and deleting a product must
// leave its sales in place.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Entity::belongs_to(super::product::Entity)
            .from(Column::ProductId)
            .to(super::product::Column::Id)
            .into()
    }
}

impl ActiveModelBehavior for ActiveModel {}
