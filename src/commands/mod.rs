//! Frontend Commands
//!
//! Bindings from the views to the core command layer, organized by domain.
//! Errors are turned into display strings here.

mod storage;
mod files;
mod list;
mod item;
mod backup;

use shopping_list_core::ListRepository;

pub use storage::LocalStorage;
pub use files::{BrowserDownload, BrowserFile};

// Re-export all public items
pub use list::*;
pub use item::*;
pub use backup::*;

/// Repository over the browser's localStorage
pub fn repo() -> ListRepository<LocalStorage> {
    ListRepository::new(LocalStorage)
}
