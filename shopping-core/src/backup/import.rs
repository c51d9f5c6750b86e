//! CSV Import
//!
//! Parses a backup document back into lists. Validation happens in order:
//! filename, emptiness, header, then per-row column count.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use crate::config::StoreConfig;
use crate::domain::{new_id, Item, ShoppingList};
use crate::repository::RepositoryError;
use super::fields::{Record, Records};
use super::{COLUMN_COUNT, CSV_HEADER};

/// Everything that can go wrong restoring a backup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("invalid file: choose a .csv backup")]
    InvalidFile,
    #[error("the file is empty")]
    EmptyFile,
    #[error("not a recognized backup: unexpected header")]
    InvalidSchema,
    #[error("malformed row at line {line}")]
    RowFormat { line: usize },
    #[error("could not read the file: {0}")]
    Read(String),
    #[error("failed to parse backup: {0}")]
    Parse(String),
    #[error("failed to save imported lists: {0}")]
    Storage(#[from] RepositoryError),
}

/// Only `.csv` files are accepted
pub fn check_filename(name: &str) -> Result<(), ImportError> {
    if name.to_ascii_lowercase().ends_with(".csv") {
        Ok(())
    } else {
        Err(ImportError::InvalidFile)
    }
}

/// Parse a backup document.
///
/// Rows are grouped by `listId` in first-seen order. Every item gets a fresh
/// id; list ids from the file are kept. `now` fills blank creation dates.
pub fn decode_lists(
    content: &str,
    config: &StoreConfig,
    now: DateTime<Utc>,
) -> Result<Vec<ShoppingList>, ImportError> {
    if content.trim().is_empty() {
        return Err(ImportError::EmptyFile);
    }

    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let (header, body) = content.split_once('\n').unwrap_or((content, ""));
    let header = header.strip_suffix('\r').unwrap_or(header);
    if header != CSV_HEADER {
        return Err(ImportError::InvalidSchema);
    }

    let mut lists: Vec<ShoppingList> = Vec::new();
    let mut by_id: HashMap<String, usize> = HashMap::new();

    for record in Records::new(body, 2) {
        let Record { line, fields } = record.map_err(|e| ImportError::RowFormat { line: e.line })?;
        let [list_id, list_name, created_at, list_completed, product_name, product_qty, product_completed]: [String; COLUMN_COUNT] =
            fields.try_into().map_err(|_| ImportError::RowFormat { line })?;

        let existing = by_id.get(&list_id).copied();
        let index = match existing {
            Some(index) => index,
            None => {
                let list = ShoppingList {
                    id: if list_id.trim().is_empty() { new_id() } else { list_id.clone() },
                    name: if list_name.trim().is_empty() {
                        config.placeholder_list_name.clone()
                    } else {
                        list_name
                    },
                    created_at: parse_created_at(&created_at, now, line)?,
                    completed: list_completed == "true",
                    items: Vec::new(),
                };
                lists.push(list);
                by_id.insert(list_id, lists.len() - 1);
                lists.len() - 1
            }
        };

        if !product_name.trim().is_empty() {
            let mut item = Item::new(product_name, parse_quantity(&product_qty));
            item.completed = product_completed == "true";
            lists[index].items.push(item);
        }
    }

    log::info!("decoded {} lists from backup", lists.len());
    Ok(lists)
}

/// Blank or non-numeric quantities read as 1, as does 0
fn parse_quantity(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(1).max(1)
}

fn parse_created_at(raw: &str, now: DateTime<Utc>, line: usize) -> Result<DateTime<Utc>, ImportError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(now);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    // Date-only values, as typed into a date picker
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ImportError::Parse(format!("line {}: invalid date '{}'", line, raw)))
}
