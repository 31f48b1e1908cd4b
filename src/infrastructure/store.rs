//! JSON file store for the journal

use crate::domain::{Journal, JournalEntry};
use crate::error::StorageError;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Abstract storage for the journal
pub trait JournalRepository {
    /// Read every persisted entry. A journal that was never saved is empty.
    fn load(&self) -> Result<Journal, StorageError>;

    /// Insert or overwrite the entry for `date` and persist the whole journal
    fn save(&self, date: &str, roses: [String; 2], thorn: String) -> Result<(), StorageError>;
}

/// Single-file JSON implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct EntryStore {
    path: PathBuf,
}

impl EntryStore {
    /// Create a store backed by the journal file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        EntryStore { path: path.into() }
    }

    /// Location of the journal file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory that holds the journal file (and its temporary siblings)
    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn write_error(&self, source: io::Error) -> StorageError {
        StorageError::Write {
            path: self.path.clone(),
            source,
        }
    }

    /// Replace the journal file with `journal`.
    ///
    /// The new content goes to a temp file in the same directory which is then
    /// renamed over the target, so readers see either the old or the new file.
    /// An existing file's permissions carry over to the replacement.
    /// A temp file left behind by a failed step is removed when it is dropped.
    fn write_atomic(&self, journal: &Journal) -> Result<(), StorageError> {
        let dir = self.parent_dir();
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| self.write_error(e))?;
        }

        let contents = encode(journal)?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.write_error(e))?;
        tmp.write_all(&contents).map_err(|e| self.write_error(e))?;
        if let Ok(meta) = fs::metadata(&self.path) {
            tmp.as_file()
                .set_permissions(meta.permissions())
                .map_err(|e| self.write_error(e))?;
        }
        tmp.as_file().sync_all().map_err(|e| self.write_error(e))?;
        tmp.persist(&self.path)
            .map_err(|e| self.write_error(e.error))?;

        Ok(())
    }
}

impl JournalRepository for EntryStore {
    fn load(&self) -> Result<Journal, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no journal file yet");
                return Ok(Journal::new());
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let journal: Journal = serde_json::from_str(&contents).map_err(|source| {
            tracing::warn!(path = %self.path.display(), error = %source, "journal file is corrupt");
            StorageError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })?;

        tracing::debug!(
            path = %self.path.display(),
            entries = journal.len(),
            "loaded journal"
        );
        Ok(journal)
    }

    fn save(&self, date: &str, roses: [String; 2], thorn: String) -> Result<(), StorageError> {
        let mut journal = self.load()?;
        let replaced = journal.insert(date, JournalEntry::new(roses, thorn));
        self.write_atomic(&journal)?;

        tracing::info!(
            date,
            overwritten = replaced.is_some(),
            entries = journal.len(),
            "saved journal entry"
        );
        Ok(())
    }
}

/// Pretty JSON with a four-space indent and a trailing newline
fn encode(journal: &Journal) -> Result<Vec<u8>, StorageError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    journal.serialize(&mut ser).map_err(StorageError::Encode)?;
    buf.push(b'\n');
    Ok(buf)
}
