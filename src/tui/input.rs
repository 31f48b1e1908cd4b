//! Single-line text input: editing state and widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Text plus a cursor measured in chars
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        TextInput::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        TextInput { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.text.insert(idx, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let idx = self.byte_index(self.cursor);
        self.text.remove(idx);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let idx = self.byte_index(self.cursor);
            self.text.remove(idx);
        }
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.char_count();
    }
}

/// Bordered input box with a label title
pub struct InputWidget<'a> {
    input: &'a TextInput,
    label: Line<'a>,
    is_active: bool,
}

impl<'a> InputWidget<'a> {
    pub fn new(input: &'a TextInput, label: Line<'a>) -> Self {
        Self {
            input,
            label,
            is_active: false,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }
}

impl Widget for InputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.is_active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.label);

        let inner = block.inner(area);
        block.render(area, buf);

        let text = self.input.text();
        let line = if !self.is_active {
            Line::from(text)
        } else {
            // Char-based split so multi-byte input never panics
            let cursor = self.input.cursor();
            let before: String = text.chars().take(cursor).collect();
            let at: String = text
                .chars()
                .nth(cursor)
                .map(|c| c.to_string())
                .unwrap_or_else(|| " ".to_string());
            let after: String = text.chars().skip(cursor + 1).collect();

            Line::from(vec![
                Span::raw(before),
                Span::styled(
                    at,
                    Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
                ),
                Span::raw(after),
            ])
        };

        Paragraph::new(line).render(inner, buf);
    }
}
