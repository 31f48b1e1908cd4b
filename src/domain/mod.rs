//! Domain layer - Journal entries and input rules

pub mod date;
pub mod draft;
pub mod entry;

pub use date::{date_key, today_key};
pub use draft::{EntryDraft, Field};
pub use entry::{Journal, JournalEntry};
