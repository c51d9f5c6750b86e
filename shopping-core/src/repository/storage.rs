//! Key-Value Storage Port
//!
//! The repository only needs get/set of a string by key. Browsers back this
//! with `localStorage`; tests and native builds use `MemoryStorage`.

use std::collections::HashMap;
use std::sync::RwLock;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No storage in this context (no window, private mode, SSR)
    #[error("storage is not available")]
    Unavailable,
    #[error("failed to write storage: {0}")]
    Write(String),
}

pub trait StoragePort: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        if let Ok(mut entries) = storage.entries.write() {
            entries.insert(key.to_string(), value.to_string());
        }
        storage
    }
}

impl StoragePort for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().map_err(|_| StorageError::Unavailable)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| StorageError::Write(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: StoragePort + ?Sized> StoragePort for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
