//! Shell state: the entry form, the history screen and the status line

use crate::application::{dispatch, Action, ActionContext, ActionOutcome};
use crate::domain::{EntryDraft, Field};
use crate::error::RosethornError;
use crate::infrastructure::JournalRepository;
use crate::tui::input::TextInput;
use crate::tui::render::{history_paragraph, history_viewport};
use ratatui::layout::Rect;

pub const SAVED_MESSAGE: &str = "✅ Entry saved!";
pub const MISSING_FIELDS_MESSAGE: &str = "⚠️ Please fill in both roses and a thorn!";

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Form,
    History,
}

/// Focus target on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input(Field),
    Button(Action),
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Input(Field::Rose1),
        Focus::Input(Field::Rose2),
        Focus::Input(Field::Thorn),
        Focus::Button(Action::Save),
        Focus::Button(Action::ViewHistory),
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Focus {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Focus {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// Status line severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

impl Status {
    fn new(kind: StatusKind, message: impl Into<String>) -> Self {
        Status {
            kind,
            message: message.into(),
        }
    }
}

pub struct App<R: JournalRepository> {
    repository: R,
    date: String,
    rose1: TextInput,
    rose2: TextInput,
    thorn: TextInput,
    pub focus: Focus,
    pub screen: Screen,
    pub status: Option<Status>,
    history: String,
    history_scroll: u16,
    history_view: Option<Rect>,
    pub should_quit: bool,
}

impl<R: JournalRepository> App<R> {
    /// Open the form for `date`, pre-filled when that date already has an entry
    pub fn new(repository: R, date: impl Into<String>) -> Self {
        let date = date.into();
        let mut app = App {
            repository,
            date,
            rose1: TextInput::new(),
            rose2: TextInput::new(),
            thorn: TextInput::new(),
            focus: Focus::Input(Field::Rose1),
            screen: Screen::Form,
            status: None,
            history: String::new(),
            history_scroll: 0,
            history_view: None,
            should_quit: false,
        };

        match app.repository.load() {
            Ok(journal) => {
                if let Some(entry) = journal.get(&app.date) {
                    let draft = EntryDraft::from_entry(entry);
                    app.rose1 = TextInput::with_text(draft.rose1);
                    app.rose2 = TextInput::with_text(draft.rose2);
                    app.thorn = TextInput::with_text(draft.thorn);
                    tracing::info!(date = %app.date, "editing existing entry");
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "could not load journal");
                app.status = Some(Status::new(StatusKind::Error, format!("❌ {}", e)));
            }
        }

        app
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn input(&self, field: Field) -> &TextInput {
        match field {
            Field::Rose1 => &self.rose1,
            Field::Rose2 => &self.rose2,
            Field::Thorn => &self.thorn,
        }
    }

    /// The input that has focus, if focus is on an input
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            Focus::Input(Field::Rose1) => Some(&mut self.rose1),
            Focus::Input(Field::Rose2) => Some(&mut self.rose2),
            Focus::Input(Field::Thorn) => Some(&mut self.thorn),
            Focus::Button(_) => None,
        }
    }

    pub fn draft(&self) -> EntryDraft {
        EntryDraft::new(self.rose1.text(), self.rose2.text(), self.thorn.text())
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Run `action` and reflect the outcome on screen
    pub fn trigger(&mut self, action: Action) {
        let draft = self.draft();
        let ctx = ActionContext {
            repository: &self.repository,
            date: &self.date,
            draft: &draft,
        };

        match dispatch(action, &ctx) {
            Ok(ActionOutcome::Saved { .. }) => {
                self.status = Some(Status::new(StatusKind::Info, SAVED_MESSAGE));
            }
            Ok(ActionOutcome::History(text)) => {
                self.history = text;
                self.history_scroll = 0;
                self.screen = Screen::History;
            }
            Err(RosethornError::Validation(_)) => {
                self.status = Some(Status::new(StatusKind::Warning, MISSING_FIELDS_MESSAGE));
            }
            Err(e) => {
                tracing::error!(?action, error = %e, "action failed");
                self.status = Some(Status::new(StatusKind::Error, format!("❌ {}", e)));
            }
        }
    }

    /// Leave the history screen
    pub fn back(&mut self) {
        self.screen = Screen::Form;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn history(&self) -> &str {
        &self.history
    }

    pub fn history_scroll(&self) -> u16 {
        self.history_scroll
    }

    /// Record the terminal size so scrolling can account for wrapped rows
    pub fn set_viewport(&mut self, area: Rect) {
        self.history_view = Some(history_viewport(area));
        self.history_scroll = self.history_scroll.min(self.max_scroll());
    }

    /// Last scroll offset that still fills the viewport; without a known
    /// viewport the last unwrapped line may reach the top
    fn max_scroll(&self) -> u16 {
        let rows = match self.history_view {
            Some(view) if view.width > 0 => history_paragraph(&self.history)
                .line_count(view.width)
                .saturating_sub(usize::from(view.height)),
            _ => self.history.lines().count().saturating_sub(1),
        };
        u16::try_from(rows).unwrap_or(u16::MAX)
    }

    pub fn scroll_up(&mut self, amount: u16) {
        self.history_scroll = self.history_scroll.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: u16) {
        self.history_scroll = self
            .history_scroll
            .saturating_add(amount)
            .min(self.max_scroll());
    }

    pub fn scroll_home(&mut self) {
        self.history_scroll = 0;
    }

    pub fn scroll_end(&mut self) {
        self.history_scroll = self.max_scroll();
    }
}
