//! Shopping List Core
//!
//! Layered architecture:
//! - domain: Lists, items and their rules
//! - repository: Storage port and the JSON-blob list repository
//! - backup: CSV export/import of the collection
//! - commands: User-level operations used by the front end

pub mod config;
pub mod domain;
pub mod repository;
pub mod backup;
pub mod commands;

pub use config::StoreConfig;
pub use domain::{DomainError, DomainResult, Item, ShoppingList};
pub use repository::{ListRepository, MemoryStorage, Repository, StoragePort};
