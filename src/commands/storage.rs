//! localStorage Adapter
//!
//! Looks the storage up on every call, so the adapter itself is a plain
//! `Send + Sync` value and works where no window exists.

use shopping_list_core::repository::{StorageError, StoragePort};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl StoragePort for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?.get_item(key).map_err(|_| StorageError::Unavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(super::files::js_error(e)))
    }
}
