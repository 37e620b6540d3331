//! Single-line query input backed by `tui_textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// Thin wrapper around [`TextArea`] that keeps the query on a single line.
pub struct QueryInput<'a> {
    textarea: TextArea<'a>,
}

impl QueryInput<'_> {
    #[must_use]
    pub fn new(initial: impl Into<String>) -> Self {
        let mut textarea = TextArea::from([initial.into()]);
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("agency, role, industry…");
        textarea.move_cursor(CursorMove::End);
        Self { textarea }
    }

    /// Current query text.
    #[must_use]
    pub fn text(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Feed a key event into the textarea. Returns `true` when the text
    /// changed. Enter is swallowed so the query stays on one line.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter => false,
            _ => self.textarea.input(key),
        }
    }

    /// Reset the query to an empty string. Returns `true` when there was
    /// text to remove.
    pub fn clear(&mut self) -> bool {
        if self.text().is_empty() {
            return false;
        }
        self.textarea.select_all();
        self.textarea.cut()
    }

    /// Render the textarea into the given area.
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        frame.render_widget(&self.textarea, area);
    }
}
