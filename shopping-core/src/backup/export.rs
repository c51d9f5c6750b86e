//! CSV Export
//!
//! Serializes lists into the backup table.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::config::StoreConfig;
use crate::domain::ShoppingList;
use super::fields::push_record;
use super::CSV_HEADER;

/// Render lists as a backup document, header included
pub fn encode_lists(lists: &[ShoppingList]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + lists.len() * 96);
    out.push_str(CSV_HEADER);
    out.push('\n');

    for list in lists {
        let created_at = list.created_at.to_rfc3339_opts(SecondsFormat::Millis, true);
        let list_completed = bool_field(list.completed);
        let list_fields = [list.id.as_str(), list.name.as_str(), created_at.as_str(), list_completed];

        if list.items.is_empty() {
            // Placeholder row so empty lists survive a restore
            push_record(&mut out, &[list_fields[0], list_fields[1], list_fields[2], list_fields[3], "", "", ""]);
            continue;
        }

        for item in &list.items {
            let quantity = item.quantity.to_string();
            push_record(
                &mut out,
                &[
                    list_fields[0],
                    list_fields[1],
                    list_fields[2],
                    list_fields[3],
                    item.name.as_str(),
                    quantity.as_str(),
                    bool_field(item.completed),
                ],
            );
        }
    }

    out
}

fn bool_field(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

fn timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y%m%d-%H%M%S").to_string()
}

/// Filename of a full backup taken at `now`
pub fn backup_filename(config: &StoreConfig, now: DateTime<Utc>) -> String {
    format!("{}-{}.csv", config.backup_prefix, timestamp(now))
}

/// Filename of a single-list export taken at `now`
pub fn list_filename(config: &StoreConfig, list_name: &str, now: DateTime<Utc>) -> String {
    format!("{}-{}-{}.csv", config.list_export_prefix, sanitize_name(list_name), timestamp(now))
}

/// Lower-cased ASCII alphanumerics of `name`, or `list` when none are left
pub fn sanitize_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if cleaned.is_empty() {
        "list".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Item;
    use chrono::TimeZone;

    fn at(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 2, h, 5, 9).unwrap()
    }

    #[test]
    fn test_one_row_per_item() {
        let mut list = ShoppingList::new("Weekly", at(9));
        list.id = "L1".to_string();
        list.items.push(Item::new("Milk", 2));
        list.items.push(Item::new("Bread", 1));
        list.items[1].completed = true;

        let csv = encode_lists(&[list]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "L1,Weekly,2024-11-02T09:05:09.000Z,false,Milk,2,false");
        assert_eq!(lines[2], "L1,Weekly,2024-11-02T09:05:09.000Z,false,Bread,1,true");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_empty_list_placeholder_row() {
        let mut list = ShoppingList::new("Empty", at(10));
        list.id = "L2".to_string();
        list.completed = true;

        let csv = encode_lists(&[list]);
        assert_eq!(csv, format!("{}\nL2,Empty,2024-11-02T10:05:09.000Z,true,,,\n", CSV_HEADER));
    }

    #[test]
    fn test_no_lists_is_header_only() {
        assert_eq!(encode_lists(&[]), format!("{}\n", CSV_HEADER));
    }

    #[test]
    fn test_filenames() {
        let config = StoreConfig::default();
        assert_eq!(backup_filename(&config, at(14)), "shopping-lists-20241102-140509.csv");
        assert_eq!(list_filename(&config, "Churrasco de Sábado!", at(14)), "list-churrascodesbado-20241102-140509.csv");
        assert_eq!(list_filename(&config, "***", at(14)), "list-list-20241102-140509.csv");
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("My List 2"), "mylist2");
        assert_eq!(sanitize_name(""), "list");
    }
}
