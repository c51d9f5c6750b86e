//! List Repository Implementation
//!
//! Keeps every list in a single JSON blob under one storage key.
//! Each call re-reads the blob, so writes made elsewhere are always seen.

use thiserror::Error;

use crate::config::StoreConfig;
use crate::domain::{DomainError, ShoppingList};
use super::storage::{StorageError, StoragePort};
use super::traits::Repository;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The stored blob is not a JSON array of lists. It is left untouched.
    #[error("stored lists are corrupt: {0}")]
    Corrupt(String),
    #[error("failed to encode lists: {0}")]
    Encode(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<RepositoryError> for DomainError {
    fn from(err: RepositoryError) -> Self {
        DomainError::Storage(err.to_string())
    }
}

/// Storage-backed implementation of Repository<ShoppingList>
pub struct ListRepository<S> {
    storage: S,
    config: StoreConfig,
}

impl<S: StoragePort> ListRepository<S> {
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, StoreConfig::default())
    }

    pub fn with_config(storage: S, config: StoreConfig) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the collection, failing on unreadable data.
    ///
    /// Mutations go through here so a corrupt blob is never overwritten.
    fn load(&self) -> Result<Vec<ShoppingList>, RepositoryError> {
        match self.storage.get(&self.config.storage_key)? {
            None => Ok(Vec::new()),
            Some(raw) if raw.trim().is_empty() => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| RepositoryError::Corrupt(e.to_string())),
        }
    }

    fn save(&self, lists: &[ShoppingList]) -> Result<(), RepositoryError> {
        let raw = serde_json::to_string(lists).map_err(|e| RepositoryError::Encode(e.to_string()))?;
        self.storage.set(&self.config.storage_key, &raw)?;
        log::debug!("saved {} lists under {}", lists.len(), self.config.storage_key);
        Ok(())
    }
}

impl<S: StoragePort> Repository<ShoppingList> for ListRepository<S> {
    fn get_all(&self) -> Vec<ShoppingList> {
        match self.load() {
            Ok(lists) => lists,
            Err(RepositoryError::Storage(StorageError::Unavailable)) => Vec::new(),
            Err(e) => {
                log::warn!("reading lists as empty: {}", e);
                Vec::new()
            }
        }
    }

    fn create(&self, entity: &ShoppingList) -> Result<(), RepositoryError> {
        let mut lists = self.load()?;
        lists.push(entity.clone());
        self.save(&lists)
    }

    fn update(&self, entity: &ShoppingList) -> Result<(), RepositoryError> {
        let mut lists = self.load()?;
        match lists.iter_mut().find(|list| list.id == entity.id) {
            Some(slot) => *slot = entity.clone(),
            None => {
                log::debug!("update of unknown list {} ignored", entity.id);
                return Ok(());
            }
        }
        self.save(&lists)
    }

    fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let mut lists = self.load()?;
        let before = lists.len();
        lists.retain(|list| list.id != id);
        if lists.len() == before {
            log::debug!("delete of unknown list {} ignored", id);
            return Ok(());
        }
        self.save(&lists)
    }

    fn replace_all(&self, entities: &[ShoppingList]) -> Result<(), RepositoryError> {
        self.save(entities)
    }
}
