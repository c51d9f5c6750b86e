//! Backup Layer
//!
//! CSV export/import of the whole list collection (or a single list).
//! One row per item, one placeholder row per empty list.

mod fields;
mod export;
mod import;
mod io;

#[cfg(test)]
mod tests;

pub use export::{backup_filename, encode_lists, list_filename, sanitize_name};
pub use import::{check_filename, decode_lists, ImportError};
pub use io::{BackupFile, DownloadSink, ExportOutcome};
#[cfg(test)]
pub use io::{MemoryDownloads, TextFile};

/// Exact first line of every backup
pub const CSV_HEADER: &str =
    "listId,listName,listCreatedAt,listCompleted,productName,productQty,productCompleted";

/// Number of columns in every data row
pub const COLUMN_COUNT: usize = 7;
