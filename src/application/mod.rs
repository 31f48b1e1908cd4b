//! Application layer - Use cases and orchestration

pub mod actions;
pub mod history;
pub mod record_entry;

pub use actions::{dispatch, Action, ActionContext, ActionOutcome};
pub use history::{show_history, HistoryView, NO_ENTRIES};
pub use record_entry::RecordEntryService;
