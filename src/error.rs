//! Error types for rosethorn

use crate::domain::Field;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to read, parse, or write the persisted journal
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read journal {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Journal file {} is corrupt: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write journal {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode journal: {0}")]
    Encode(#[source] serde_json::Error),
}

impl StorageError {
    /// Path of the journal file involved, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            StorageError::Read { path, .. }
            | StorageError::Corrupt { path, .. }
            | StorageError::Write { path, .. } => Some(path),
            StorageError::Encode(_) => None,
        }
    }
}

/// Caller-supplied entry text that cannot be saved
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Empty field(s): {}", join_fields(.0))]
    EmptyFields(Vec<Field>),
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Main error type for the rosethorn application
#[derive(Debug, Error)]
pub enum RosethornError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse rosethorn.toml: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl RosethornError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            RosethornError::Config(_) | RosethornError::TomlDeserialize(_) => 2,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            RosethornError::Storage(StorageError::Corrupt { path, .. }) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Fix the JSON in {} by hand, or move it aside to start a fresh journal\n\
                    • Point ROSETHORN_JOURNAL at a different journal file",
                    self,
                    path.display()
                )
            }
            RosethornError::Storage(StorageError::Write { .. })
            | RosethornError::Storage(StorageError::Read { .. }) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that the journal directory exists and is writable\n\
                    • Check that the disk is not full\n\
                    • Set journal_file in rosethorn.toml to another location",
                    self
                )
            }
            RosethornError::Validation(_) => "Please fill in both roses and a thorn!".to_string(),
            RosethornError::Config(_) | RosethornError::TomlDeserialize(_) => {
                format!(
                    "{}\n\n\
                    Valid keys in rosethorn.toml: journal_file, log_file\n\
                    Example: journal_file = \"roses_thorns_journal.json\"",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using RosethornError
pub type Result<T> = std::result::Result<T, RosethornError>;
