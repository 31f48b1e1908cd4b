//! Raw form input and the non-empty check the shell applies before saving

use crate::domain::JournalEntry;
use crate::error::ValidationError;
use std::fmt;

/// One of the three text inputs on the entry form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Rose1,
    Rose2,
    Thorn,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Rose1, Field::Rose2, Field::Thorn];
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Rose1 => write!(f, "rose #1"),
            Field::Rose2 => write!(f, "rose #2"),
            Field::Thorn => write!(f, "thorn"),
        }
    }
}

/// Untrimmed text as typed into the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub rose1: String,
    pub rose2: String,
    pub thorn: String,
}

impl EntryDraft {
    pub fn new(
        rose1: impl Into<String>,
        rose2: impl Into<String>,
        thorn: impl Into<String>,
    ) -> Self {
        EntryDraft {
            rose1: rose1.into(),
            rose2: rose2.into(),
            thorn: thorn.into(),
        }
    }

    pub fn from_entry(entry: &JournalEntry) -> Self {
        EntryDraft::new(
            entry.roses[0].clone(),
            entry.roses[1].clone(),
            entry.thorn.clone(),
        )
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Rose1 => &self.rose1,
            Field::Rose2 => &self.rose2,
            Field::Thorn => &self.thorn,
        }
    }

    /// Trim every field and reject the draft if any is left empty.
    ///
    /// All empty fields are reported, in form order.
    pub fn validate(&self) -> Result<JournalEntry, ValidationError> {
        let empty: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|f| self.field(*f).trim().is_empty())
            .collect();

        if !empty.is_empty() {
            return Err(ValidationError::EmptyFields(empty));
        }

        Ok(JournalEntry::new(
            [
                self.rose1.trim().to_string(),
                self.rose2.trim().to_string(),
            ],
            self.thorn.trim().to_string(),
        ))
    }
}
