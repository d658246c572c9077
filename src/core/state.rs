//! # Application State
//!
//! Core business state. No terminal types live here; presentation state
//! (palette, layout timing) belongs to the `tui` module.
//!
//! ```text
//! App
//! ├── user_id: String          // local sender id, decides bubble side
//! ├── blink: bool              // cursor visibility, toggled by a ticker
//! └── screen: Screen
//!     ├── List(ChatList)       // chat ids + selection + error
//!     └── Chat(ChatRoom)       // title, messages, error, input editor
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use log::debug;

use super::chat_list::ChatList;
use super::editor::InputEditor;
use super::message::{ChatUpdate, Message};

/// An open chat.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatRoom {
    pub chat_id: String,
    pub title: String,
    /// Replaced wholesale by every successful poll.
    pub messages: Vec<Message>,
    pub error: Option<String>,
    pub editor: InputEditor,
}

impl ChatRoom {
    pub fn new(chat_id: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            ..Default::default()
        }
    }

    /// Merge a server snapshot.
    ///
    /// A missing or empty title keeps the current one; a missing message list
    /// keeps the current messages, a present one (even empty) replaces them.
    /// Any successful update clears a previous error.
    pub fn apply_update(&mut self, update: ChatUpdate) {
        if let Some(title) = update.title.filter(|t| !t.is_empty()) {
            self.title = title;
        }
        if let Some(messages) = update.messages {
            debug!("Chat {}: {} messages", self.chat_id, messages.len());
            self.messages = messages;
        }
        self.error = None;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    List(ChatList),
    Chat(ChatRoom),
}

pub struct App {
    pub user_id: String,
    pub screen: Screen,
    pub blink: bool,
}

impl App {
    /// Start on the chat list, or directly in `initial_chat` when given.
    pub fn new(user_id: impl Into<String>, initial_chat: Option<&str>) -> Self {
        let screen = match initial_chat {
            Some(id) => Screen::Chat(ChatRoom::new(id)),
            None => Screen::List(ChatList::new()),
        };
        Self {
            user_id: user_id.into(),
            screen,
            blink: true,
        }
    }
}
