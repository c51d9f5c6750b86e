//! Backup Commands

use chrono::Utc;
use shopping_list_core::backup::ExportOutcome;
use shopping_list_core::{commands, ShoppingList};

use super::{repo, BrowserDownload, BrowserFile};

pub fn export_all() -> Result<ExportOutcome, String> {
    commands::export_all(&repo(), &BrowserDownload, Utc::now()).map_err(|e| e.to_string())
}

pub fn export_list(id: &str) -> Result<ExportOutcome, String> {
    commands::export_list(&repo(), id, &BrowserDownload, Utc::now()).map_err(|e| e.to_string())
}

pub async fn import_file(file: web_sys::File) -> Result<Vec<ShoppingList>, String> {
    commands::import_backup(&repo(), &BrowserFile(file), Utc::now())
        .await
        .map_err(|e| e.to_string())
}
