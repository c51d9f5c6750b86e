//! Store Configuration
//!
//! Names used by the repository and the backup codec.

use serde::{Deserialize, Serialize};

/// Storage key used by every build of the app so far
pub const DEFAULT_STORAGE_KEY: &str = "@shopping-app:lists";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Key of the JSON blob holding all lists
    pub storage_key: String,
    /// Name given to imported lists whose name column is blank
    pub placeholder_list_name: String,
    /// Filename prefix of a full backup
    pub backup_prefix: String,
    /// Filename prefix of a single-list export
    pub list_export_prefix: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            placeholder_list_name: "Untitled list".to_string(),
            backup_prefix: "shopping-lists".to_string(),
            list_export_prefix: "list".to_string(),
        }
    }
}
