//! # Chat List
//!
//! Selection state for the chat picker. Up/Down move the highlight,
//! Right/Enter open the highlighted chat. When nothing can be highlighted
//! (empty list) opening creates the chat named [`NEW_CHAT_ID`].

use super::key::{Key, KeyInput};

pub const NEW_CHAT_ID: &str = "new";
pub const LIST_TITLE: &str = "Chats";

#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    SelectionChanged,
    Open(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatList {
    pub chat_ids: Vec<String>,
    pub selected: usize,
    pub error: Option<String>,
}

impl ChatList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list, keeping the selection in range.
    pub fn set_chat_ids(&mut self, ids: Vec<String>) {
        self.chat_ids = ids;
        self.selected = self.selected.min(self.chat_ids.len().saturating_sub(1));
        self.error = None;
    }

    pub fn handle_key(&mut self, input: &KeyInput) -> Option<ListEvent> {
        if input.modified {
            return None;
        }

        match input.key {
            Key::Down => (self.selected + 1 < self.chat_ids.len()).then(|| {
                self.selected += 1;
                ListEvent::SelectionChanged
            }),
            Key::Up => (self.selected > 0).then(|| {
                self.selected -= 1;
                ListEvent::SelectionChanged
            }),
            Key::Right | Key::Enter => Some(ListEvent::Open(self.selected_id().to_string())),
            _ => None,
        }
    }

    fn selected_id(&self) -> &str {
        self.chat_ids
            .get(self.selected)
            .map(String::as_str)
            .unwrap_or(NEW_CHAT_ID)
    }
}
