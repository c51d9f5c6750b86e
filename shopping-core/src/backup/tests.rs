//! Backup Round-Trip Tests
//!
//! Export/import through the commands layer over in-memory storage.

use chrono::{DateTime, TimeZone, Utc};

use crate::backup::{decode_lists, encode_lists, ExportOutcome, ImportError, MemoryDownloads, TextFile, CSV_HEADER};
use crate::commands::{add_item, create_list, export_all, export_list, import_backup, toggle_item, toggle_list};
use crate::config::StoreConfig;
use crate::domain::ShoppingList;
use crate::repository::{ListRepository, MemoryStorage, Repository};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 2, 14, 18, 0, 0).unwrap()
}

fn decode(content: &str) -> Result<Vec<ShoppingList>, ImportError> {
    decode_lists(content, &StoreConfig::default(), now())
}

fn csv(rows: &[&str]) -> String {
    let mut out = format!("{}\n", CSV_HEADER);
    for row in rows {
        out.push_str(row);
        out.push('\n');
    }
    out
}

/// Repository with two lists: one with items, one empty
fn seeded_repo() -> ListRepository<MemoryStorage> {
    let repo = ListRepository::new(MemoryStorage::new());
    let weekly = create_list(&repo, "Weekly, main", Utc.with_ymd_and_hms(2025, 2, 1, 9, 30, 0).unwrap()).unwrap();
    add_item(&repo, &weekly.id, "Milk", 2).unwrap();
    let bread = add_item(&repo, &weekly.id, "Bread \"sourdough\"", 1).unwrap();
    toggle_item(&repo, &weekly.id, &bread.items[1].id).unwrap();

    let party = create_list(&repo, "Party", Utc.with_ymd_and_hms(2025, 2, 7, 0, 0, 0).unwrap()).unwrap();
    toggle_list(&repo, &party.id).unwrap();
    repo
}

/// Everything except item ids
fn shape(lists: &[ShoppingList]) -> Vec<(String, String, DateTime<Utc>, bool, Vec<(String, u32, bool)>)> {
    lists
        .iter()
        .map(|list| {
            let items = list.items.iter().map(|i| (i.name.clone(), i.quantity, i.completed)).collect();
            (list.id.clone(), list.name.clone(), list.created_at, list.completed, items)
        })
        .collect()
}

#[tokio::test]
async fn test_export_then_import_round_trip() {
    let source = seeded_repo();
    let downloads = MemoryDownloads::new();
    let outcome = export_all(&source, &downloads, now()).unwrap();
    assert_eq!(
        outcome,
        ExportOutcome::Saved { filename: "shopping-lists-20250214-180000.csv".to_string(), rows: 3 }
    );

    let (filename, content) = downloads.saved().remove(0);
    let target = ListRepository::new(MemoryStorage::new());
    let imported = import_backup(&target, &TextFile::new(filename, content), now()).await.unwrap();

    let original = source.get_all();
    assert_eq!(shape(&imported), shape(&original));
    assert_eq!(target.get_all(), imported);

    let original_ids: Vec<&str> = original.iter().flat_map(|l| l.items.iter().map(|i| i.id.as_str())).collect();
    assert!(imported.iter().flat_map(|l| &l.items).all(|i| !original_ids.contains(&i.id.as_str())));
}

#[tokio::test]
async fn test_round_trip_keeps_wall_clock_dates() {
    let source = ListRepository::new(MemoryStorage::new());
    let list = create_list(&source, "Today", Utc::now()).unwrap();
    add_item(&source, &list.id, "Coffee", 1).unwrap();

    let downloads = MemoryDownloads::new();
    export_all(&source, &downloads, now()).unwrap();
    let (filename, content) = downloads.saved().remove(0);
    let target = ListRepository::new(MemoryStorage::new());
    let imported = import_backup(&target, &TextFile::new(filename, content), now()).await.unwrap();

    assert_eq!(imported[0].created_at, source.get_all()[0].created_at);
    assert_eq!(shape(&imported), shape(&source.get_all()));
}

#[test]
fn test_scenario_two_lists_one_empty() {
    let content = csv(&[
        "A,Market,2025-01-10T12:00:00.000Z,false,Milk,2,false",
        "A,Market,2025-01-10T12:00:00.000Z,false,Bread,1,true",
        "B,Pharmacy,2025-01-11T08:00:00.000Z,false,,,",
    ]);
    let lists = decode(&content).unwrap();

    assert_eq!(lists.len(), 2);
    assert_eq!(lists[0].id, "A");
    assert_eq!(lists[0].items.len(), 2);
    assert_eq!((lists[0].items[0].name.as_str(), lists[0].items[0].quantity, lists[0].items[0].completed), ("Milk", 2, false));
    assert_eq!((lists[0].items[1].name.as_str(), lists[0].items[1].quantity, lists[0].items[1].completed), ("Bread", 1, true));
    assert_eq!(lists[1].id, "B");
    assert!(lists[1].items.is_empty());
}

#[test]
fn test_empty_list_round_trips_as_empty() {
    let mut empty = ShoppingList::new("Nothing yet", now());
    empty.id = "E".to_string();
    let content = encode_lists(std::slice::from_ref(&empty));
    assert_eq!(content.lines().count(), 2);

    let lists = decode(&content).unwrap();
    assert_eq!(lists, vec![empty]);
}

#[test]
fn test_first_occurrence_sets_list_fields() {
    let content = csv(&[
        "A,First name,2025-01-10T12:00:00.000Z,true,Milk,1,false",
        "A,Other name,2025-03-01T00:00:00.000Z,false,Eggs,12,false",
    ]);
    let lists = decode(&content).unwrap();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].name, "First name");
    assert!(lists[0].completed);
    assert_eq!(lists[0].items[1].quantity, 12);
}

#[test]
fn test_blank_list_fields_get_defaults() {
    let content = csv(&[",,,,Milk,x,"]);
    let lists = decode(&content).unwrap();
    assert_eq!(lists[0].name, "Untitled list");
    assert_eq!(lists[0].created_at, now());
    assert!(!lists[0].id.is_empty());
    assert!(!lists[0].completed);
    assert_eq!(lists[0].items[0].quantity, 1);
    assert!(!lists[0].items[0].completed);
}

#[test]
fn test_header_must_match_exactly() {
    let bad_headers = [
        format!("{} ", CSV_HEADER),
        CSV_HEADER.to_uppercase(),
        "listId,listName,listCreatedAt,listCompleted,productName,productQty".to_string(),
        "name,qty".to_string(),
    ];
    for header in bad_headers {
        // The row below is malformed too; the header check must win.
        let content = format!("{}\nA,B\n", header);
        assert_eq!(decode(&content), Err(ImportError::InvalidSchema), "header {:?}", header);
    }
}

#[test]
fn test_crlf_and_bom_are_accepted() {
    let content = format!("\u{feff}{}\r\nA,Market,2025-01-10,false,Milk,2,false\r\n", CSV_HEADER);
    let lists = decode(&content).unwrap();
    assert_eq!(lists[0].items[0].name, "Milk");
    assert_eq!(lists[0].created_at, Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap());
}

#[test]
fn test_short_row_reports_source_line() {
    let content = csv(&["A,Market,2025-01-10T12:00:00.000Z,false,Milk,2,false", "A,Market,oops"]);
    assert_eq!(decode(&content), Err(ImportError::RowFormat { line: 3 }));

    let with_blank = csv(&["", "A,Market,2025-01-10T12:00:00.000Z,false,Milk,2"]);
    assert_eq!(decode(&with_blank), Err(ImportError::RowFormat { line: 3 }));
}

#[test]
fn test_extra_columns_are_rejected() {
    let content = csv(&["A,Market,2025-01-10T12:00:00.000Z,false,Milk,2,false,extra"]);
    assert_eq!(decode(&content), Err(ImportError::RowFormat { line: 2 }));
}

#[test]
fn test_empty_content() {
    assert_eq!(decode(""), Err(ImportError::EmptyFile));
    assert_eq!(decode("  \n\t\n"), Err(ImportError::EmptyFile));
}

#[test]
fn test_header_only_yields_no_lists() {
    assert_eq!(decode(CSV_HEADER), Ok(Vec::new()));
}

#[test]
fn test_bad_date_is_a_parse_failure() {
    let content = csv(&["A,Market,someday,false,Milk,2,false"]);
    assert!(matches!(decode(&content), Err(ImportError::Parse(_))));
}

#[test]
fn test_names_with_delimiters_survive() {
    let mut list = ShoppingList::new("Rice, beans\nand \"more\"", now());
    list.items.push(crate::domain::Item::new("Tomatoes, ripe", 4));
    let lists = decode(&encode_lists(std::slice::from_ref(&list))).unwrap();
    assert_eq!(lists[0].name, list.name);
    assert_eq!(lists[0].items[0].name, "Tomatoes, ripe");
}

#[tokio::test]
async fn test_import_validation_order() {
    let repo = seeded_repo();
    let before = repo.get_all();

    let wrong_ext = TextFile::new("backup.txt", "");
    assert_eq!(import_backup(&repo, &wrong_ext, now()).await, Err(ImportError::InvalidFile));

    let unreadable = TextFile::unreadable("backup.csv", "permission denied");
    assert_eq!(
        import_backup(&repo, &unreadable, now()).await,
        Err(ImportError::Read("permission denied".to_string()))
    );

    let empty = TextFile::new("backup.csv", " ");
    assert_eq!(import_backup(&repo, &empty, now()).await, Err(ImportError::EmptyFile));

    assert_eq!(repo.get_all(), before);
}

#[tokio::test]
async fn test_import_overwrites_instead_of_merging() {
    let repo = seeded_repo();
    let content = csv(&["Z,Only one,2025-01-10T12:00:00.000Z,false,Salt,1,false"]);
    let imported = import_backup(&repo, &TextFile::new("restore.csv", content), now()).await.unwrap();

    assert_eq!(imported.len(), 1);
    let stored = repo.get_all();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Only one");
}

#[test]
fn test_export_empty_collection_is_noop() {
    let repo = ListRepository::new(MemoryStorage::new());
    let downloads = MemoryDownloads::new();
    assert_eq!(export_all(&repo, &downloads, now()).unwrap(), ExportOutcome::NothingToExport);
    assert!(downloads.saved().is_empty());
}

#[test]
fn test_export_single_list() {
    let repo = seeded_repo();
    let party = repo.get_all().into_iter().find(|l| l.name == "Party").unwrap();
    let downloads = MemoryDownloads::new();

    let outcome = export_list(&repo, &party.id, &downloads, now()).unwrap();
    assert_eq!(
        outcome,
        ExportOutcome::Saved { filename: "list-party-20250214-180000.csv".to_string(), rows: 1 }
    );
    let (_, content) = downloads.saved().remove(0);
    assert!(content.ends_with(",Party,2025-02-07T00:00:00.000Z,true,,,\n"));

    assert!(export_list(&repo, "missing", &downloads, now()).is_err());
}
