//! Commands for CSV backups
//!
//! Import is destructive: the decoded lists replace everything stored.

use chrono::{DateTime, Utc};

use crate::backup::{
    backup_filename, check_filename, decode_lists, encode_lists, list_filename, BackupFile,
    DownloadSink, ExportOutcome, ImportError,
};
use crate::domain::{DomainError, DomainResult, ShoppingList};
use crate::repository::{ListRepository, Repository, StoragePort};
use super::list_cmd::get_list;

fn row_count(lists: &[ShoppingList]) -> usize {
    lists.iter().map(|list| list.items.len().max(1)).sum()
}

fn save_backup<D: DownloadSink + ?Sized>(sink: &D, filename: String, lists: &[ShoppingList]) -> DomainResult<ExportOutcome> {
    let content = encode_lists(lists);
    sink.save(&filename, &content)
        .map_err(|e| DomainError::Storage(format!("failed to save {}: {}", filename, e)))?;
    let rows = row_count(lists);
    log::info!("exported {} rows to {}", rows, filename);
    Ok(ExportOutcome::Saved { filename, rows })
}

/// Export every list. Nothing is saved when there are no lists.
pub fn export_all<S, D>(repo: &ListRepository<S>, sink: &D, now: DateTime<Utc>) -> DomainResult<ExportOutcome>
where
    S: StoragePort,
    D: DownloadSink + ?Sized,
{
    let lists = repo.get_all();
    if lists.is_empty() {
        return Ok(ExportOutcome::NothingToExport);
    }
    save_backup(sink, backup_filename(repo.config(), now), &lists)
}

/// Export a single list, even an empty one
pub fn export_list<S, D>(
    repo: &ListRepository<S>,
    id: &str,
    sink: &D,
    now: DateTime<Utc>,
) -> DomainResult<ExportOutcome>
where
    S: StoragePort,
    D: DownloadSink + ?Sized,
{
    let list = get_list(repo, id)?;
    let filename = list_filename(repo.config(), &list.name, now);
    save_backup(sink, filename, std::slice::from_ref(&list))
}

/// Restore a backup file, replacing every stored list.
///
/// Returns the lists now stored.
pub async fn import_backup<S, F>(
    repo: &ListRepository<S>,
    file: &F,
    now: DateTime<Utc>,
) -> Result<Vec<ShoppingList>, ImportError>
where
    S: StoragePort,
    F: BackupFile + ?Sized,
{
    let name = file.name();
    check_filename(&name)?;
    let content = file.read_text().await.map_err(ImportError::Read)?;
    let lists = decode_lists(&content, repo.config(), now)?;
    repo.replace_all(&lists)?;
    log::info!("imported {} lists from {}", lists.len(), name);
    Ok(lists)
}
