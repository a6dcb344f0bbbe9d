//! Single-line text buffer backing edit fields.
//!
//! The cursor is kept as a byte offset that always sits on a char boundary,
//! so multi-byte input never splits a character.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    buffer: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let buffer = text.into();
        let cursor = buffer.len();
        Self { buffer, cursor }
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
            self.buffer.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    /// Removes the word before the cursor along with any whitespace after it.
    pub fn delete_word_before(&mut self) {
        let head = &self.buffer[..self.cursor];
        let trimmed = head.trim_end();
        let start = trimmed
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(idx, c)| idx + c.len_utf8())
            .unwrap_or(0);
        self.buffer.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.buffer[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.cursor = self.buffer.len();
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn is_blank(&self) -> bool {
        self.buffer.trim().is_empty()
    }

    /// Cursor position counted in characters, for placing the terminal cursor.
    pub fn cursor_column(&self) -> usize {
        self.buffer[..self.cursor].chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_text_places_cursor_at_end() {
        let input = TextInput::with_text("abc");
        assert_eq!(input.value(), "abc");
        assert_eq!(input.cursor_column(), 3);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = TextInput::with_text("ac");
        input.move_left();
        input.insert_char('b');
        assert_eq!(input.value(), "abc");
        assert_eq!(input.cursor_column(), 2);
    }

    #[test]
    fn test_backspace_multibyte() {
        let mut input = TextInput::with_text("añ");
        input.backspace();
        assert_eq!(input.value(), "a");
        input.backspace();
        input.backspace();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor_column(), 0);
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let mut input = TextInput::with_text("x");
        input.delete();
        assert_eq!(input.value(), "x");
        input.move_home();
        input.delete();
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_delete_word_before() {
        let mut input = TextInput::with_text("fix the  login ");
        input.delete_word_before();
        assert_eq!(input.value(), "fix the  ");
        input.delete_word_before();
        assert_eq!(input.value(), "fix ");
        input.delete_word_before();
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_cursor_column_counts_chars() {
        let mut input = TextInput::with_text("ñññ");
        input.move_left();
        assert_eq!(input.cursor_column(), 2);
        input.move_home();
        input.move_right();
        assert_eq!(input.cursor_column(), 1);
    }

    #[test]
    fn test_is_blank() {
        assert!(TextInput::with_text("   ").is_blank());
        assert!(!TextInput::with_text(" a ").is_blank());
    }
}
