//! Input buffer state for the chat input bar.

/// Editing state for a single-field text input, tracking content and cursor.
///
/// The cursor is a character index so editing stays safe on multi-byte text.
#[derive(Debug, Clone, Default)]
pub struct InputBuffer {
    content: String,
    /// Cursor position as a character index.
    cursor: usize,
}

impl InputBuffer {
    /// Create an empty input buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Cursor position as a character index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Check if the content is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Clear the content and reset the cursor.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Take the content, clearing the state.
    pub fn take(&mut self) -> String {
        let content = std::mem::take(&mut self.content);
        self.cursor = 0;
        content
    }

    /// Byte offset of the cursor within the content.
    fn byte_index(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map_or(self.content.len(), |(i, _)| i)
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, ch: char) {
        let at = self.byte_index();
        self.content.insert(at, ch);
        self.cursor += 1;
    }

    /// Insert a string at the cursor position.
    pub fn insert_str(&mut self, s: &str) {
        let at = self.byte_index();
        self.content.insert_str(at, s);
        self.cursor += s.chars().count();
    }

    /// Delete the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index();
            self.content.remove(at);
        }
    }

    /// Delete the character at the cursor (delete).
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index();
            self.content.remove(at);
        }
    }

    /// Move cursor left.
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end.
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut buffer = InputBuffer::new();
        assert!(buffer.is_empty());

        buffer.insert('H');
        buffer.insert('i');
        assert_eq!(buffer.content(), "Hi");
        assert_eq!(buffer.cursor(), 2);

        buffer.backspace();
        assert_eq!(buffer.content(), "H");

        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.cursor(), 0);
    }

    #[test]
    fn test_cursor_movement_and_edit() {
        let mut buffer = InputBuffer::new();
        buffer.insert_str("Hello");

        buffer.move_left();
        buffer.move_left();
        assert_eq!(buffer.cursor(), 3);

        buffer.insert('X');
        assert_eq!(buffer.content(), "HelXlo");

        buffer.move_home();
        assert_eq!(buffer.cursor(), 0);
        buffer.delete();
        assert_eq!(buffer.content(), "elXlo");

        buffer.move_end();
        assert_eq!(buffer.cursor(), 5);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut buffer = InputBuffer::new();
        buffer.insert_str("café");
        assert_eq!(buffer.cursor(), 4);

        buffer.backspace();
        assert_eq!(buffer.content(), "caf");

        buffer.move_home();
        buffer.insert('é');
        assert_eq!(buffer.content(), "écaf");
    }

    #[test]
    fn test_take_clears_state() {
        let mut buffer = InputBuffer::new();
        buffer.insert_str("drafted");

        let content = buffer.take();
        assert_eq!(content, "drafted");
        assert!(buffer.is_empty());
        assert_eq!(buffer.cursor(), 0);
    }
}
