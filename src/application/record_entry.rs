//! Record-today's-entry use case

use crate::domain::{EntryDraft, JournalEntry};
use crate::error::Result;
use crate::infrastructure::JournalRepository;

/// Service that validates form input and saves it
pub struct RecordEntryService<'a, R: JournalRepository> {
    repository: &'a R,
}

impl<'a, R: JournalRepository> RecordEntryService<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        RecordEntryService { repository }
    }

    /// Validate `draft` and save it as the entry for `date`.
    ///
    /// Nothing is written when validation fails.
    pub fn record(&self, date: &str, draft: &EntryDraft) -> Result<JournalEntry> {
        let entry = draft.validate().inspect_err(|e| {
            tracing::debug!(date, error = %e, "rejected entry");
        })?;

        self.repository
            .save(date, entry.roses.clone(), entry.thorn.clone())?;

        Ok(entry)
    }
}
