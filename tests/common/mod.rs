#![allow(dead_code)]

use assert_cmd::Command;
use rosethorn::infrastructure::EntryStore;
use tempfile::TempDir;

pub fn rosethorn_cmd() -> Command {
    let mut cmd = Command::cargo_bin("rosethorn").unwrap();
    cmd.env_remove("ROSETHORN_JOURNAL");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// A store whose journal file lives in a fresh temp directory
pub fn temp_store() -> (TempDir, EntryStore) {
    let temp = TempDir::new().unwrap();
    let store = EntryStore::new(temp.path().join("roses_thorns_journal.json"));
    (temp, store)
}

pub fn roses(a: &str, b: &str) -> [String; 2] {
    [a.to_string(), b.to_string()]
}
