//! Screen drawing

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::application::Action;
use crate::domain::Field;
use crate::infrastructure::JournalRepository;
use crate::tui::app::{App, Focus, Screen, StatusKind};
use crate::tui::input::InputWidget;

const FORM_TITLE: &str = "Roses and Thorns Journal";
const HISTORY_TITLE: &str = "History of Entries";

/// Draw whichever screen is active
pub fn render<R: JournalRepository>(frame: &mut Frame, app: &App<R>) {
    let area = frame.area();
    match app.screen {
        Screen::Form => render_form(frame, area, app),
        Screen::History => render_history(frame, area, app),
    }
}

fn header(title: &str) -> Paragraph<'_> {
    Paragraph::new(Line::from(Span::styled(
        title,
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .style(Style::default().bg(Color::Blue).fg(Color::White))
}

fn footer(hints: &str) -> Paragraph<'_> {
    Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(Color::DarkGray),
    )))
}

fn field_label(field: Field) -> Line<'static> {
    let (icon, color, name, prompt) = match field {
        Field::Rose1 => ("🌹", Color::Green, "Rose #1:", "Something positive about your day"),
        Field::Rose2 => ("🌹", Color::Green, "Rose #2:", "Another positive about your day"),
        Field::Thorn => ("🌵", Color::Red, "Thorn:", "Something challenging about your day"),
    };
    Line::from(vec![
        Span::styled(format!(" {} {} ", icon, name), Style::default().fg(color)),
        Span::raw(format!("{} ", prompt)),
    ])
}

fn button(label: &str, focused: bool) -> Paragraph<'_> {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Paragraph::new(label)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .style(style)
}

fn render_form<R: JournalRepository>(frame: &mut Frame, area: Rect, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(1), // date
            Constraint::Length(3), // rose 1
            Constraint::Length(3), // rose 2
            Constraint::Length(3), // thorn
            Constraint::Length(3), // buttons
            Constraint::Length(1), // status
            Constraint::Min(0),
            Constraint::Length(1), // footer
        ])
        .split(area);

    frame.render_widget(header(FORM_TITLE), chunks[0]);
    frame.render_widget(
        Paragraph::new(format!("📅 {}", app.date())).style(Style::default().add_modifier(Modifier::BOLD)),
        chunks[1],
    );

    for (field, chunk) in Field::ALL.into_iter().zip(&chunks[2..5]) {
        let widget = InputWidget::new(app.input(field), field_label(field))
            .active(app.focus == Focus::Input(field));
        frame.render_widget(widget, *chunk);
    }

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Length(14), Constraint::Min(0)])
        .split(chunks[5]);
    frame.render_widget(
        button("💾 Save", app.focus == Focus::Button(Action::Save)),
        buttons[0],
    );
    frame.render_widget(
        button("📜 History", app.focus == Focus::Button(Action::ViewHistory)),
        buttons[1],
    );

    if let Some(status) = &app.status {
        let color = match status.kind {
            StatusKind::Info => Color::Green,
            StatusKind::Warning => Color::Yellow,
            StatusKind::Error => Color::Red,
        };
        frame.render_widget(
            Paragraph::new(status.message.as_str()).style(Style::default().fg(color)),
            chunks[6],
        );
    }

    frame.render_widget(
        footer("Tab next · Enter select · F2 save · F3 history · Ctrl-Q quit"),
        chunks[8],
    );
}

/// Color the date, roses and thorn lines of the rendered history text
fn history_line(line: &str) -> Line<'_> {
    let style = if line.starts_with("📅") {
        Style::default().add_modifier(Modifier::BOLD)
    } else if line.starts_with("🌹") {
        Style::default().fg(Color::Green)
    } else if line.starts_with("🌵") {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(Span::styled(line, style))
}

fn history_chunks(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area)
}

fn history_block() -> Block<'static> {
    Block::default().borders(Borders::ALL)
}

/// Area inside the history border for a terminal of size `area`
pub fn history_viewport(area: Rect) -> Rect {
    history_block().inner(history_chunks(area)[1])
}

/// History text as a wrapped paragraph, without its border
pub fn history_paragraph(text: &str) -> Paragraph<'_> {
    let lines: Vec<Line> = text.lines().map(history_line).collect();
    Paragraph::new(lines).wrap(Wrap { trim: false })
}

fn render_history<R: JournalRepository>(frame: &mut Frame, area: Rect, app: &App<R>) {
    let chunks = history_chunks(area);

    frame.render_widget(header(HISTORY_TITLE), chunks[0]);

    let body = history_paragraph(app.history())
        .block(history_block())
        .scroll((app.history_scroll(), 0));
    frame.render_widget(body, chunks[1]);

    frame.render_widget(footer("↑/↓ scroll · Esc back · q quit"), chunks[2]);
}
