//! Commands Layer
//!
//! User-level operations over the repository. Each one re-reads storage,
//! applies the change and writes the collection back.

mod list_cmd;
mod item_cmd;
mod backup_cmd;

pub use list_cmd::*;
pub use item_cmd::*;
pub use backup_cmd::*;
