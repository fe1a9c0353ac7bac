//! Text input widget
//!
//! Cursor-aware text state for dialog fields, plus the line builders the
//! dialogs share for rendering fields, spinners, and toggles.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Editable text state for a single form field
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position (byte offset)
    pub cursor: usize,
    /// Placeholder text shown while empty and unfocused
    pub placeholder: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content, moving the cursor to the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.content.len();
        self
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if let Some((offset, _)) = self.content[..self.cursor].char_indices().next_back() {
            self.content.remove(offset);
            self.cursor = offset;
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.content.len() {
            self.content.remove(self.cursor);
        }
    }

    /// Move cursor left one character
    pub fn move_left(&mut self) {
        if let Some((offset, _)) = self.content[..self.cursor].char_indices().next_back() {
            self.cursor = offset;
        }
    }

    /// Move cursor right one character
    pub fn move_right(&mut self) {
        if let Some(c) = self.content[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.content.len();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }
}

fn label_span(label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    Span::styled(format!("{:>10}: ", label), style)
}

/// Build a rendered line for a text field, with cursor when focused
pub fn field_line(label: &str, input: &TextInput, focused: bool) -> Line<'static> {
    let value_style = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let display_value = if input.content.is_empty() && !focused {
        input.placeholder.clone()
    } else {
        input.content.clone()
    };

    let mut spans = vec![label_span(label, focused)];

    if focused {
        let cursor_pos = input.cursor.min(display_value.len());
        let (before, after) = display_value.split_at(cursor_pos);

        spans.push(Span::styled(before.to_string(), value_style));

        let cursor_char = after.chars().next().unwrap_or(' ');
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));

        let rest = &after[cursor_char.len_utf8().min(after.len())..];
        if !rest.is_empty() {
            spans.push(Span::styled(rest.to_string(), value_style));
        }
    } else {
        spans.push(Span::styled(display_value, value_style));
    }

    Line::from(spans)
}

/// Build a rendered line for a cycling selection field
pub fn spinner_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let mut spans = vec![
        label_span(label, focused),
        Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
        Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
    ];

    if focused {
        spans.push(Span::styled(
            "  (↑/↓ to change)",
            Style::default().fg(Color::DarkGray),
        ));
    }

    Line::from(spans)
}

/// Build a rendered line for a boolean toggle field
pub fn toggle_line(label: &str, on: bool, focused: bool) -> Line<'static> {
    let marker = if on { "[x] Yes" } else { "[ ] No" };

    let mut spans = vec![
        label_span(label, focused),
        Span::styled(marker, Style::default().fg(Color::White)),
    ];

    if focused {
        spans.push(Span::styled(
            "  (Space to toggle)",
            Style::default().fg(Color::DarkGray),
        ));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        input.insert('4');
        input.insert('2');
        assert_eq!(input.value(), "42");
        assert_eq!(input.cursor, 2);

        input.backspace();
        assert_eq!(input.value(), "4");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn test_cursor_movement_and_mid_insert() {
        let mut input = TextInput::new().content("ab");
        input.move_left();
        input.insert('x');
        assert_eq!(input.value(), "axb");
        assert_eq!(input.cursor, 2);

        input.move_start();
        assert_eq!(input.cursor, 0);
        input.move_end();
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn test_multibyte_cursor_stays_on_boundaries() {
        let mut input = TextInput::new();
        input.insert('é');
        input.insert('!');

        input.move_left();
        input.move_left();
        assert_eq!(input.cursor, 0);

        input.move_right();
        assert_eq!(input.cursor, 'é'.len_utf8());

        input.backspace();
        assert_eq!(input.value(), "!");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_clear() {
        let mut input = TextInput::new().content("grocery");
        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor, 0);
    }
}
