//! Integration tests for journal persistence

use rosethorn::domain::JournalEntry;
use rosethorn::infrastructure::{EntryStore, JournalRepository};
use rosethorn::StorageError;
use std::fs;

mod common;
use common::{roses, temp_store};

#[test]
fn test_round_trip() {
    let (_temp, store) = temp_store();

    store
        .save(
            "2024-06-01",
            roses("Finished project", "Sunny weather"),
            "Missed the bus".to_string(),
        )
        .unwrap();

    let journal = store.load().unwrap();
    assert_eq!(
        journal.get("2024-06-01"),
        Some(&JournalEntry::new(
            roses("Finished project", "Sunny weather"),
            "Missed the bus".to_string()
        ))
    );
}

#[test]
fn test_overwrite_keeps_other_dates() {
    let (_temp, store) = temp_store();

    store
        .save("2024-06-01", roses("a", "b"), "first".to_string())
        .unwrap();
    store
        .save("2024-06-02", roses("c", "d"), "other day".to_string())
        .unwrap();
    store
        .save("2024-06-01", roses("e", "f"), "second".to_string())
        .unwrap();

    let journal = store.load().unwrap();
    assert_eq!(journal.len(), 2);
    assert_eq!(journal.get("2024-06-01").unwrap().thorn, "second");
    assert_eq!(journal.get("2024-06-01").unwrap().roses, roses("e", "f"));
    assert_eq!(journal.get("2024-06-02").unwrap().thorn, "other day");
}

#[test]
fn test_empty_state() {
    let (_temp, store) = temp_store();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_corrupt_payloads_fail() {
    let payloads = [
        "{\"2024-06-01\": {\"roses\": [\"a\", \"b\"], \"thorn\": ",
        "[]",
        "{\"2024-06-01\": {\"roses\": \"a\", \"thorn\": \"t\"}}",
        "{\"2024-06-01\": {\"roses\": [\"a\", \"b\", \"c\"], \"thorn\": \"t\"}}",
        "   ",
    ];

    for payload in payloads {
        let (_temp, store) = temp_store();
        fs::write(store.path(), payload).unwrap();

        match store.load() {
            Err(StorageError::Corrupt { .. }) => {}
            other => panic!("Expected Corrupt for {:?}, got {:?}", payload, other),
        }
    }
}

#[test]
fn test_reads_files_written_by_other_tools() {
    let (_temp, store) = temp_store();
    fs::write(
        store.path(),
        r#"{
    "2024-05-30": {
        "roses": [
            "Coffee",
            "Long walk"
        ],
        "thorn": "Rain"
    }
}"#,
    )
    .unwrap();

    store
        .save("2024-05-31", roses("x", "y"), "z".to_string())
        .unwrap();

    let journal = store.load().unwrap();
    assert_eq!(journal.len(), 2);
    assert_eq!(journal.get("2024-05-30").unwrap().thorn, "Rain");
}

#[test]
fn test_stable_field_names_on_disk() {
    let (_temp, store) = temp_store();
    store
        .save("2024-06-01", roses("a", "b"), "c".to_string())
        .unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(value["2024-06-01"]["roses"][1], "b");
    assert_eq!(value["2024-06-01"]["thorn"], "c");
}

#[test]
fn test_two_stores_same_file_last_write_wins() {
    let (_temp, store) = temp_store();
    let other = EntryStore::new(store.path());

    store
        .save("2024-06-01", roses("a", "b"), "mine".to_string())
        .unwrap();
    other
        .save("2024-06-01", roses("c", "d"), "theirs".to_string())
        .unwrap();

    assert_eq!(
        store.load().unwrap().get("2024-06-01").unwrap().thorn,
        "theirs"
    );
}
