//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod storage;
mod list_repo;


pub use traits::Repository;
pub use storage::{MemoryStorage, StorageError, StoragePort};
pub use list_repo::{ListRepository, RepositoryError};
