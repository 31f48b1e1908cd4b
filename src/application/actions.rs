//! Command dispatch for the two shell actions

use crate::application::history::show_history;
use crate::application::record_entry::RecordEntryService;
use crate::domain::EntryDraft;
use crate::error::Result;
use crate::infrastructure::JournalRepository;

/// Action identifiers the shell can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Save,
    ViewHistory,
}

/// What a dispatched action produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Saved { date: String },
    History(String),
}

/// Everything an action handler may need
pub struct ActionContext<'a, R: JournalRepository> {
    pub repository: &'a R,
    pub date: &'a str,
    pub draft: &'a EntryDraft,
}

/// Run the handler for `action`
pub fn dispatch<R: JournalRepository>(
    action: Action,
    ctx: &ActionContext<'_, R>,
) -> Result<ActionOutcome> {
    tracing::debug!(?action, date = ctx.date, "dispatching action");
    match action {
        Action::Save => save(ctx),
        Action::ViewHistory => view_history(ctx),
    }
}

fn save<R: JournalRepository>(ctx: &ActionContext<'_, R>) -> Result<ActionOutcome> {
    RecordEntryService::new(ctx.repository).record(ctx.date, ctx.draft)?;
    Ok(ActionOutcome::Saved {
        date: ctx.date.to_string(),
    })
}

fn view_history<R: JournalRepository>(ctx: &ActionContext<'_, R>) -> Result<ActionOutcome> {
    Ok(ActionOutcome::History(show_history(ctx.repository)?))
}
