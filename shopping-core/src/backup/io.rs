//! Backup I/O Seams
//!
//! Reading a picked file is the one asynchronous step of an import.
//! Saving a backup hands a filename and content to whatever triggers the download.

use async_trait::async_trait;

/// A file chosen by the user for import
#[async_trait(?Send)]
pub trait BackupFile {
    fn name(&self) -> String;

    /// Full text content of the file
    async fn read_text(&self) -> Result<String, String>;
}

/// Somewhere a generated backup can be saved to
pub trait DownloadSink {
    fn save(&self, filename: &str, content: &str) -> Result<(), String>;
}

/// Result of an export request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Saved { filename: String, rows: usize },
    /// There were no lists; nothing was produced
    NothingToExport,
}

#[cfg(test)]
pub use memory::{MemoryDownloads, TextFile};

/// In-memory stand-ins for the browser file picker and download
#[cfg(test)]
mod memory {
    use std::sync::Mutex;
    use async_trait::async_trait;

    use super::{BackupFile, DownloadSink};

    /// A file already held in memory
    #[derive(Debug, Clone)]
    pub struct TextFile {
        name: String,
        content: Result<String, String>,
    }

    impl TextFile {
        pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
            Self { name: name.into(), content: Ok(content.into()) }
        }

        /// A file whose read fails with `reason`
        pub fn unreadable(name: impl Into<String>, reason: impl Into<String>) -> Self {
            Self { name: name.into(), content: Err(reason.into()) }
        }
    }

    #[async_trait(?Send)]
    impl BackupFile for TextFile {
        fn name(&self) -> String {
            self.name.clone()
        }

        async fn read_text(&self) -> Result<String, String> {
            self.content.clone()
        }
    }

    /// Collects saved backups instead of downloading them
    #[derive(Debug, Default)]
    pub struct MemoryDownloads {
        saved: Mutex<Vec<(String, String)>>,
    }

    impl MemoryDownloads {
        pub fn new() -> Self {
            Self::default()
        }

        /// (filename, content) pairs in save order
        pub fn saved(&self) -> Vec<(String, String)> {
            self.saved.lock().map(|saved| saved.clone()).unwrap_or_default()
        }
    }

    impl DownloadSink for MemoryDownloads {
        fn save(&self, filename: &str, content: &str) -> Result<(), String> {
            self.saved
                .lock()
                .map_err(|e| e.to_string())?
                .push((filename.to_string(), content.to_string()));
            Ok(())
        }
    }
}
