//! Entity module - SeaORM entity definitions for the three ledger tables.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod expense;
pub mod income;
pub mod product;

// Re-export specific types to avoid conflicts
pub use expense::{Column as ExpenseColumn, Entity as Expense, Model as ExpenseModel};
pub use income::{Column as IncomeColumn, Entity as Income, Model as IncomeModel};
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
