//! Key handling for the journal shell

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::application::Action;
use crate::infrastructure::JournalRepository;
use crate::tui::app::{App, Focus, Screen};

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
}

/// Handle a terminal event
pub fn handle_event<R: JournalRepository>(app: &mut App<R>, event: Event) -> EventResult {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    }
}

/// Handle a key event
fn handle_key_event<R: JournalRepository>(app: &mut App<R>, key: KeyEvent) -> EventResult {
    // Global shortcuts (always work)
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
    {
        app.quit();
        return EventResult::Quit;
    }

    let result = match app.screen {
        Screen::Form => handle_form_key(app, key),
        Screen::History => handle_history_key(app, key),
    };

    if app.should_quit {
        EventResult::Quit
    } else {
        result
    }
}

fn handle_form_key<R: JournalRepository>(app: &mut App<R>, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            app.focus_next();
            return EventResult::NeedsRedraw;
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.focus_prev();
            return EventResult::NeedsRedraw;
        }
        KeyCode::F(2) => {
            app.trigger(Action::Save);
            return EventResult::NeedsRedraw;
        }
        KeyCode::F(3) => {
            app.trigger(Action::ViewHistory);
            return EventResult::NeedsRedraw;
        }
        _ => {}
    }

    match app.focus {
        Focus::Button(action) => handle_button_key(app, action, key),
        Focus::Input(_) => handle_input_key(app, key),
    }
}

fn handle_button_key<R: JournalRepository>(
    app: &mut App<R>,
    action: Action,
    key: KeyEvent,
) -> EventResult {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.trigger(action);
            EventResult::NeedsRedraw
        }
        KeyCode::Left => {
            app.focus_prev();
            EventResult::NeedsRedraw
        }
        KeyCode::Right => {
            app.focus_next();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('q') => {
            app.quit();
            EventResult::Quit
        }
        _ => EventResult::Continue,
    }
}

fn handle_input_key<R: JournalRepository>(app: &mut App<R>, key: KeyEvent) -> EventResult {
    if key.code == KeyCode::Enter {
        app.focus_next();
        return EventResult::NeedsRedraw;
    }

    let Some(input) = app.focused_input_mut() else {
        return EventResult::Continue;
    };

    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.left(),
        KeyCode::Right => input.right(),
        KeyCode::Home => input.home(),
        KeyCode::End => input.end(),
        _ => return EventResult::Continue,
    }
    EventResult::NeedsRedraw
}

fn handle_history_key<R: JournalRepository>(app: &mut App<R>, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc => app.back(),
        KeyCode::Char('q') => {
            app.quit();
            return EventResult::Quit;
        }
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
        KeyCode::PageUp => app.scroll_up(10),
        KeyCode::PageDown => app.scroll_down(10),
        KeyCode::Home | KeyCode::Char('g') => app.scroll_home(),
        KeyCode::End | KeyCode::Char('G') => app.scroll_end(),
        _ => return EventResult::Continue,
    }
    EventResult::NeedsRedraw
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EntryDraft, Field};
    use crate::infrastructure::EntryStore;
    use crate::tui::app::{StatusKind, MISSING_FIELDS_MESSAGE, SAVED_MESSAGE};
    use tempfile::TempDir;

    fn app_in(temp: &TempDir) -> App<EntryStore> {
        App::new(EntryStore::new(temp.path().join("journal.json")), "2024-06-01")
    }

    fn press(app: &mut App<EntryStore>, code: KeyCode) -> EventResult {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn type_text(app: &mut App<EntryStore>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_fill_form_and_save_with_button() {
        let temp = TempDir::new().unwrap();
        let mut app = app_in(&temp);

        type_text(&mut app, "Finished project");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "Sunny weather");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Missed the bus");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.focus, Focus::Button(Action::Save));

        press(&mut app, KeyCode::Enter);

        assert_eq!(app.status.as_ref().unwrap().message, SAVED_MESSAGE);
        let journal = app.repository().load().unwrap();
        assert_eq!(
            EntryDraft::from_entry(journal.get("2024-06-01").unwrap()),
            EntryDraft::new("Finished project", "Sunny weather", "Missed the bus")
        );
    }

    #[test]
    fn test_q_types_into_input() {
        let temp = TempDir::new().unwrap();
        let mut app = app_in(&temp);

        let result = press(&mut app, KeyCode::Char('q'));
        assert_eq!(result, EventResult::NeedsRedraw);
        assert_eq!(app.input(Field::Rose1).text(), "q");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_q_quits_from_button() {
        let temp = TempDir::new().unwrap();
        let mut app = app_in(&temp);
        app.focus = Focus::Button(Action::ViewHistory);

        assert_eq!(press(&mut app, KeyCode::Char('q')), EventResult::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_q_quits_anywhere() {
        let temp = TempDir::new().unwrap();
        let mut app = app_in(&temp);

        let event = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert_eq!(handle_event(&mut app, event), EventResult::Quit);
        assert_eq!(app.input(Field::Rose1).text(), "");
    }

    #[test]
    fn test_f2_with_empty_fields_warns() {
        let temp = TempDir::new().unwrap();
        let mut app = app_in(&temp);
        type_text(&mut app, "only one rose");

        press(&mut app, KeyCode::F(2));

        let status = app.status.clone().unwrap();
        assert_eq!(status.kind, StatusKind::Warning);
        assert_eq!(status.message, MISSING_FIELDS_MESSAGE);
        assert!(!app.repository().path().exists());
    }

    #[test]
    fn test_history_button_and_escape() {
        let temp = TempDir::new().unwrap();
        let mut app = app_in(&temp);
        app.focus = Focus::Button(Action::ViewHistory);

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.screen, Screen::History);

        // Typing on the history screen does not touch the form
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Form);
        assert_eq!(app.draft(), EntryDraft::default());
    }

    #[test]
    fn test_history_q_quits() {
        let temp = TempDir::new().unwrap();
        let mut app = app_in(&temp);
        press(&mut app, KeyCode::F(3));

        assert_eq!(press(&mut app, KeyCode::Char('q')), EventResult::Quit);
    }

    #[test]
    fn test_release_events_ignored() {
        let temp = TempDir::new().unwrap();
        let mut app = app_in(&temp);

        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(handle_event(&mut app, Event::Key(key)), EventResult::Continue);
        assert_eq!(app.input(Field::Rose1).text(), "");
    }

    #[test]
    fn test_editing_keys() {
        let temp = TempDir::new().unwrap();
        let mut app = app_in(&temp);

        type_text(&mut app, "rse");
        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Right);
        type_text(&mut app, "o");
        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Delete);
        assert_eq!(app.input(Field::Rose1).text(), "os");
    }
}
