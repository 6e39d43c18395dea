//! Minimal single-line text field for form input.
//!
//! Supports the subset of editing operations the login and transfer forms
//! need: insert, delete, and cursor movement within one line.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use unicode_width::UnicodeWidthChar;

/// Single-line text buffer with a char-indexed cursor.
#[derive(Debug, Clone, Default)]
pub struct FieldBuffer {
    chars: Vec<char>,
    cursor: usize,
}

impl FieldBuffer {
    /// Returns the field's content.
    pub fn value(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Number of chars in the field.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Cursor position in char units (0..=len).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display width of the text left of the cursor.
    pub fn width_before_cursor(&self) -> usize {
        self.chars[..self.cursor]
            .iter()
            .map(|c| c.width().unwrap_or(0))
            .sum()
    }

    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }

    /// Inserts a char at the cursor. Control chars are ignored.
    pub fn insert(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        self.chars.insert(self.cursor, c);
        self.cursor += 1;
    }

    /// Removes the char before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.chars.remove(self.cursor);
        }
    }

    /// Removes the char under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.chars.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.chars.len();
    }

    /// Applies a key event to the field. Returns true if the key was handled.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.move_home();
                    true
                }
                KeyCode::Char('e') => {
                    self.move_end();
                    true
                }
                KeyCode::Char('u') => {
                    self.clear();
                    true
                }
                _ => false,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                self.insert(c);
                true
            }
            KeyCode::Backspace => {
                self.backspace();
                true
            }
            KeyCode::Delete => {
                self.delete();
                true
            }
            KeyCode::Left => {
                self.move_left();
                true
            }
            KeyCode::Right => {
                self.move_right();
                true
            }
            KeyCode::Home => {
                self.move_home();
                true
            }
            KeyCode::End => {
                self.move_end();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> FieldBuffer {
        let mut field = FieldBuffer::default();
        for c in text.chars() {
            field.insert(c);
        }
        field
    }

    #[test]
    fn insert_advances_cursor() {
        let field = typed("abc");
        assert_eq!(field.value(), "abc");
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn insert_mid_field() {
        let mut field = typed("ac");
        field.move_left();
        field.insert('b');
        assert_eq!(field.value(), "abc");
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut field = typed("abc");
        field.backspace();
        assert_eq!(field.value(), "ab");

        field.move_home();
        field.backspace();
        assert_eq!(field.value(), "ab");
    }

    #[test]
    fn delete_removes_under_cursor() {
        let mut field = typed("abc");
        field.move_home();
        field.delete();
        assert_eq!(field.value(), "bc");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn control_chars_are_ignored() {
        let mut field = typed("ab");
        field.insert('\t');
        assert_eq!(field.value(), "ab");
    }

    #[test]
    fn ctrl_u_clears() {
        let mut field = typed("secret");
        let handled = field.input(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert!(handled);
        assert!(field.is_empty());
    }

    #[test]
    fn wide_chars_count_display_width() {
        let field = typed("名前");
        assert_eq!(field.width_before_cursor(), 4);
        assert_eq!(field.len(), 2);
    }
}
