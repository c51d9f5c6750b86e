//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all domain entities.
//! Identities are opaque strings; fresh ones are uuid v4.

use thiserror::Error;

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// Returns the entity's unique identifier
    fn id(&self) -> &str;
}

/// Mint a fresh identity for a new entity
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Storage error: {0}")]
    Storage(String),
}
