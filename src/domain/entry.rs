//! Journal entries and the date-keyed journal

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// One day's two roses and one thorn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub roses: [String; 2],
    pub thorn: String,
    /// Keys written by other tools; carried through rewrites untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JournalEntry {
    pub fn new(roses: [String; 2], thorn: String) -> Self {
        JournalEntry {
            roses,
            thorn,
            extra: Map::new(),
        }
    }
}

/// All entries, keyed by ISO-8601 date string.
///
/// Serializes as a plain JSON object so the on-disk shape is
/// `{ "2024-06-01": { "roses": [..], "thorn": ".." } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Journal {
    entries: BTreeMap<String, JournalEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Journal::default()
    }

    pub fn get(&self, date: &str) -> Option<&JournalEntry> {
        self.entries.get(date)
    }

    /// Insert or overwrite the entry for `date`, returning the replaced entry
    pub fn insert(&mut self, date: impl Into<String>, entry: JournalEntry) -> Option<JournalEntry> {
        self.entries.insert(date.into(), entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending date order
    pub fn iter(&self) -> btree_map::Iter<'_, String, JournalEntry> {
        self.entries.iter()
    }

    /// Entries with the most recent date first.
    ///
    /// ISO-8601 keys sort lexicographically in calendar order, so this is a
    /// plain reverse walk of the map.
    pub fn newest_first(&self) -> impl Iterator<Item = (&String, &JournalEntry)> {
        self.entries.iter().rev()
    }
}

impl FromIterator<(String, JournalEntry)> for Journal {
    fn from_iter<I: IntoIterator<Item = (String, JournalEntry)>>(iter: I) -> Self {
        Journal {
            entries: iter.into_iter().collect(),
        }
    }
}
