use crossterm::event::{KeyCode, KeyEvent};

/// Single-line text field used by the login form and the path prompt.
#[derive(Clone, Debug, Default)]
pub(super) struct Input {
    pub(super) buf: String,
    /// Cursor position in chars.
    pub(super) cursor: usize,
}

impl Input {
    pub(super) fn with_text(text: &str) -> Self {
        Self {
            buf: text.to_string(),
            cursor: text.chars().count(),
        }
    }

    fn byte_at(&self, char_idx: usize) -> usize {
        self.buf
            .char_indices()
            .nth(char_idx)
            .map_or(self.buf.len(), |(i, _)| i)
    }

    fn char_len(&self) -> usize {
        self.buf.chars().count()
    }

    pub(super) fn insert_char(&mut self, c: char) {
        let at = self.byte_at(self.cursor);
        self.buf.insert(at, c);
        self.cursor += 1;
    }

    pub(super) fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_at(self.cursor);
        self.buf.remove(at);
    }

    pub(super) fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_at(self.cursor);
            self.buf.remove(at);
        }
    }

    pub(super) fn masked(&self) -> String {
        "*".repeat(self.char_len())
    }

    /// Apply an editing key. Returns false for keys a field does not handle.
    pub(super) fn edit(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.char_len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.char_len(),
            _ => return false,
        }
        true
    }
}
