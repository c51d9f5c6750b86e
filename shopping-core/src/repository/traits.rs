//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for data access.
//! The whole collection is the unit of every read and write.

use crate::domain::Entity;
use super::list_repo::RepositoryError;

/// Core repository trait for CRUD operations
///
/// Lookups never fail: missing or unreadable data reads as empty.
/// `update` and `delete` on an unknown id are silent no-ops.
pub trait Repository<T: Entity>: Send + Sync {
    /// List all entities, in stored order
    fn get_all(&self) -> Vec<T>;

    /// Find entity by ID
    fn get_by_id(&self, id: &str) -> Option<T> {
        self.get_all().into_iter().find(|entity| entity.id() == id)
    }

    /// Append a new entity
    fn create(&self, entity: &T) -> Result<(), RepositoryError>;

    /// Replace the entity with the same id
    fn update(&self, entity: &T) -> Result<(), RepositoryError>;

    /// Delete entity by ID
    fn delete(&self, id: &str) -> Result<(), RepositoryError>;

    /// Overwrite the whole collection
    fn replace_all(&self, entities: &[T]) -> Result<(), RepositoryError>;
}
