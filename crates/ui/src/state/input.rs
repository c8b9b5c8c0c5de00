/// Editable text line or block with prompt history
///
/// `cursor` is a byte offset that always sits on a char boundary.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Current input buffer
    pub buffer: String,
    /// Cursor position (byte offset)
    pub cursor: usize,
    /// Prompts sent so far, oldest first
    pub message_history: Vec<String>,
    /// Current position in history (None = new message)
    pub history_index: Option<usize>,
    /// Draft kept aside while browsing history
    pub temp_buffer: Option<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input pre-filled with `text`, cursor at the end
    pub fn with_text(text: impl Into<String>) -> Self {
        let buffer = text.into();
        let cursor = buffer.len();
        Self { buffer, cursor, ..Self::default() }
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert pasted text at the cursor; `\r\n` and `\r` become `\n`
    pub fn insert_str(&mut self, text: &str) {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        self.buffer.insert_str(self.cursor, &text);
        self.cursor += text.len();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.buffer.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.buffer.replace_range(self.cursor..next, "");
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    /// Start of the current line
    pub fn move_home(&mut self) {
        self.cursor = self.buffer[..self.cursor].rfind('\n').map(|i| i + 1).unwrap_or(0);
    }

    /// End of the current line
    pub fn move_end(&mut self) {
        self.cursor = self.buffer[self.cursor..]
            .find('\n')
            .map(|i| self.cursor + i)
            .unwrap_or(self.buffer.len());
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.reset_history_navigation();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Text before the cursor
    pub fn before_cursor(&self) -> &str {
        &self.buffer[..self.cursor]
    }

    /// Zero-based line the cursor is on
    pub fn cursor_line(&self) -> usize {
        self.before_cursor().matches('\n').count()
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.buffer[..self.cursor].char_indices().next_back().map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.buffer[self.cursor..].chars().next().map(|c| self.cursor + c.len_utf8())
    }

    /// Add a message to history (called after a successful send)
    pub fn add_to_history(&mut self, message: String) {
        if message.is_empty() {
            return;
        }
        if let Some(last) = self.message_history.last()
            && last == &message
        {
            return;
        }
        self.message_history.push(message);
        self.reset_history_navigation();
    }

    /// Navigate up in history (older messages)
    pub fn navigate_up(&mut self) {
        if self.message_history.is_empty() {
            return;
        }

        if self.history_index.is_none() {
            self.temp_buffer = Some(self.buffer.clone());
        }

        let new_index = match self.history_index {
            None => self.message_history.len() - 1,
            Some(idx) => idx.saturating_sub(1),
        };

        if let Some(message) = self.message_history.get(new_index) {
            self.buffer = message.clone();
            self.cursor = self.buffer.len();
            self.history_index = Some(new_index);
        }
    }

    /// Navigate down in history (newer messages, then the draft)
    pub fn navigate_down(&mut self) {
        let Some(idx) = self.history_index else {
            return;
        };

        if idx + 1 >= self.message_history.len() {
            self.buffer = self.temp_buffer.take().unwrap_or_default();
            self.cursor = self.buffer.len();
            self.history_index = None;
        } else if let Some(message) = self.message_history.get(idx + 1) {
            self.buffer = message.clone();
            self.cursor = self.buffer.len();
            self.history_index = Some(idx + 1);
        }
    }

    pub fn reset_history_navigation(&mut self) {
        self.history_index = None;
        self.temp_buffer = None;
    }

    /// "n/total" while browsing history
    pub fn history_position(&self) -> Option<String> {
        self.history_index
            .map(|idx| format!("{}/{}", idx + 1, self.message_history.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = InputState::new();
        input.insert_char('h');
        input.insert_char('i');
        assert_eq!(input.buffer, "hi");
        assert_eq!(input.cursor, 2);

        input.backspace();
        assert_eq!(input.buffer, "h");
        assert_eq!(input.cursor, 1);

        input.backspace();
        input.backspace();
        assert!(input.is_empty());
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_insert_str_keeps_newlines() {
        let mut input = InputState::with_text("ab");
        input.move_left();
        input.insert_str("x\r\ny\rz");
        assert_eq!(input.buffer, "ax\ny\nzb");
        assert_eq!(input.cursor, 6);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = InputState::new();
        for c in "café ✓".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.cursor, input.buffer.len());

        input.backspace();
        assert_eq!(input.buffer, "café ");

        input.move_left();
        input.move_left();
        input.delete();
        assert_eq!(input.buffer, "caf ");

        input.insert_char('é');
        assert_eq!(input.buffer, "café ");
    }

    #[test]
    fn test_cursor_movement() {
        let mut input = InputState::with_text("abc");
        input.move_left();
        input.move_left();
        assert_eq!(input.cursor, 1);

        input.move_right();
        assert_eq!(input.cursor, 2);

        input.move_home();
        assert_eq!(input.cursor, 0);
        input.move_left();
        assert_eq!(input.cursor, 0);

        input.move_end();
        assert_eq!(input.cursor, 3);
        input.move_right();
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn test_home_end_are_line_relative() {
        let mut input = InputState::with_text("first\nsecond");
        assert_eq!(input.cursor_line(), 1);

        input.move_home();
        assert_eq!(input.cursor, 6);
        assert_eq!(input.before_cursor(), "first\n");

        input.cursor = 2;
        input.move_end();
        assert_eq!(input.cursor, 5);
        assert_eq!(input.cursor_line(), 0);
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let mut input = InputState::with_text("x");
        input.delete();
        assert_eq!(input.buffer, "x");
    }

    #[test]
    fn test_history_navigation() {
        let mut input = InputState::new();
        input.add_to_history("first".to_string());
        input.add_to_history("second".to_string());
        input.buffer = "draft".to_string();
        input.cursor = 5;

        input.navigate_up();
        assert_eq!(input.buffer, "second");
        assert_eq!(input.history_position(), Some("2/2".to_string()));

        input.navigate_up();
        assert_eq!(input.buffer, "first");
        input.navigate_up();
        assert_eq!(input.buffer, "first");

        input.navigate_down();
        assert_eq!(input.buffer, "second");
        input.navigate_down();
        assert_eq!(input.buffer, "draft");
        assert!(input.history_position().is_none());
    }

    #[test]
    fn test_history_skips_duplicates_and_empty() {
        let mut input = InputState::new();
        input.add_to_history("same".to_string());
        input.add_to_history("same".to_string());
        input.add_to_history(String::new());
        assert_eq!(input.message_history.len(), 1);
    }

    #[test]
    fn test_navigate_with_empty_history() {
        let mut input = InputState::with_text("draft");
        input.navigate_up();
        input.navigate_down();
        assert_eq!(input.buffer, "draft");
    }

    #[test]
    fn test_clear_resets_navigation() {
        let mut input = InputState::new();
        input.add_to_history("old".to_string());
        input.navigate_up();
        input.clear();
        assert!(input.is_empty());
        assert!(input.history_index.is_none());
    }
}
