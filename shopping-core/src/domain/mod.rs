//! Domain Layer
//!
//! Contains the shopping list entities and their rules.
//! This layer only depends on serde, chrono, uuid and thiserror.

mod entity;
mod item;
mod list;

pub use entity::{new_id, Entity, DomainError, DomainResult};
pub use item::{step_quantity, Item};
pub use list::ShoppingList;
