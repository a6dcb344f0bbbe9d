use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taiga_core::TextInput;

use super::Widget;
use crate::signals::WidgetId;

#[derive(Debug, Clone)]
pub struct Edit {
    id: WidgetId,
    pub caption: String,
    input: TextInput,
}

impl Edit {
    pub fn new(caption: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: WidgetId::next(),
            caption: caption.into(),
            input: TextInput::with_text(text),
        }
    }

    pub fn edit_text(&self) -> &str {
        self.input.value()
    }

    pub fn set_edit_text(&mut self, text: impl Into<String>) {
        self.input.set(text);
    }

    pub fn cursor_column(&self) -> usize {
        self.input.cursor_column()
    }

    /// Applies an editing key. Returns `true` when the text changed.
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        let before = self.input.value().len();
        match event.code {
            KeyCode::Char('w') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.delete_word_before();
            }
            KeyCode::Char(c) if !event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.insert_char(c);
            }
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            _ => {}
        }
        self.input.value().len() != before
    }
}

impl Widget for Edit {
    fn id(&self) -> WidgetId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_reports_change() {
        let mut edit = Edit::new("Subject", "");
        assert!(edit.handle_key(&key(KeyCode::Char('a'))));
        assert!(edit.handle_key(&key(KeyCode::Char('b'))));
        assert_eq!(edit.edit_text(), "ab");
    }

    #[test]
    fn test_cursor_moves_do_not_report_change() {
        let mut edit = Edit::new("Subject", "abc");
        assert!(!edit.handle_key(&key(KeyCode::Left)));
        assert!(!edit.handle_key(&key(KeyCode::Home)));
        assert!(!edit.handle_key(&key(KeyCode::Backspace)));
        assert!(edit.handle_key(&key(KeyCode::Delete)));
        assert_eq!(edit.edit_text(), "bc");
    }

    #[test]
    fn test_ctrl_w_deletes_word() {
        let mut edit = Edit::new("Subject", "fix login");
        let ctrl_w = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL);
        assert!(edit.handle_key(&ctrl_w));
        assert_eq!(edit.edit_text(), "fix ");
    }
}
