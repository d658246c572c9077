//! # Input Editor
//!
//! Owns the in-progress message text and the cursor, and applies key and
//! paste events to them.
//!
//! The cursor is a *character* offset in `0..=text.chars().count()`, the same
//! unit the layout code uses to place it on wrapped lines. Every mutation
//! keeps it in range.

use super::key::{Key, KeyInput};

/// High-level events emitted by the editor.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// Text or cursor changed.
    ContentChanged,
    /// Left pressed with the cursor already at 0.
    NavigateBack,
    /// Enter pressed with non-blank text; carries the trimmed text.
    Submit(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputEditor {
    text: String,
    cursor: usize,
}

impl InputEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte offset of character index `idx` (or the end of the text).
    fn byte_offset(&self, idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Apply a key press. Returns `None` when nothing happened.
    pub fn handle_key(&mut self, input: &KeyInput) -> Option<EditorEvent> {
        if input.modified {
            return None;
        }

        match input.key {
            Key::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    Some(EditorEvent::ContentChanged)
                } else {
                    Some(EditorEvent::NavigateBack)
                }
            }
            Key::Right => (self.cursor < self.len()).then(|| {
                self.cursor += 1;
                EditorEvent::ContentChanged
            }),
            Key::Backspace => (self.cursor > 0).then(|| {
                let at = self.byte_offset(self.cursor - 1);
                self.text.remove(at);
                self.cursor -= 1;
                EditorEvent::ContentChanged
            }),
            Key::Delete => (self.cursor < self.len()).then(|| {
                let at = self.byte_offset(self.cursor);
                self.text.remove(at);
                EditorEvent::ContentChanged
            }),
            Key::Enter => {
                let trimmed = self.text.trim();
                if trimmed.is_empty() {
                    return None;
                }
                let text = trimmed.to_string();
                self.text.clear();
                self.cursor = 0;
                Some(EditorEvent::Submit(text))
            }
            Key::Char(c) if !c.is_control() => {
                let at = self.byte_offset(self.cursor);
                self.text.insert(at, c);
                self.cursor += 1;
                Some(EditorEvent::ContentChanged)
            }
            Key::Char(_) | Key::Up | Key::Down | Key::Other => None,
        }
    }

    /// Insert pasted text at the cursor and move past it.
    pub fn paste(&mut self, pasted: &str) -> Option<EditorEvent> {
        if pasted.is_empty() {
            return None;
        }
        let at = self.byte_offset(self.cursor);
        self.text.insert_str(at, pasted);
        self.cursor += pasted.chars().count();
        Some(EditorEvent::ContentChanged)
    }
}
