//! # Actions
//!
//! Everything that can happen in the app becomes an `Action`.
//! User presses a key? That's `Action::Key(input)`.
//! A poll resolves? That's `Action::ChatUpdated { .. }`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the adapter must perform. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  State' + Effect
//! ```
//!
//! Network results carry the chat id they were requested for. Results for a
//! chat that is no longer open are dropped, so a late response from a
//! cancelled poll can never leak into another screen.

use chrono::Utc;
use log::{debug, info, warn};

use super::chat_list::{ChatList, ListEvent};
use super::editor::EditorEvent;
use super::key::KeyInput;
use super::message::{ChatUpdate, OutgoingMessage};
use super::state::{App, ChatRoom, Screen};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Key(KeyInput),
    Paste(String),
    ChatsLoaded(Vec<String>),
    ChatsFailed(String),
    ChatUpdated { chat_id: String, update: ChatUpdate },
    PollFailed { chat_id: String, error: String },
    SendFailed(String),
    BlinkTick,
    Quit,
}

/// Side effects requested by `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// The chat screen was entered: start polling this chat.
    OpenChat(String),
    /// The list screen was entered: stop polling and fetch chat ids.
    OpenList,
    /// Post a message; nothing waits for the outcome.
    Send {
        chat_id: String,
        message: OutgoingMessage,
    },
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Key(input) => handle_key(app, &input),
        Action::Paste(text) => {
            if let Screen::Chat(room) = &mut app.screen {
                room.editor.paste(&text);
            }
            Effect::None
        }
        Action::ChatsLoaded(ids) => {
            if let Screen::List(list) = &mut app.screen {
                info!("Loaded {} chat ids", ids.len());
                list.set_chat_ids(ids);
            }
            Effect::None
        }
        Action::ChatsFailed(error) => {
            if let Screen::List(list) = &mut app.screen {
                list.error = Some(error);
            }
            Effect::None
        }
        Action::ChatUpdated { chat_id, update } => {
            match open_room(app, &chat_id) {
                Some(room) => room.apply_update(update),
                None => debug!("Dropping update for closed chat {}", chat_id),
            }
            Effect::None
        }
        Action::PollFailed { chat_id, error } => {
            if let Some(room) = open_room(app, &chat_id) {
                room.error = Some(error);
            }
            Effect::None
        }
        Action::SendFailed(error) => {
            warn!("Send failed: {}", error);
            Effect::None
        }
        Action::BlinkTick => {
            app.blink = !app.blink;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn open_room<'a>(app: &'a mut App, chat_id: &str) -> Option<&'a mut ChatRoom> {
    match &mut app.screen {
        Screen::Chat(room) if room.chat_id == chat_id => Some(room),
        _ => None,
    }
}

fn handle_key(app: &mut App, input: &KeyInput) -> Effect {
    match &mut app.screen {
        Screen::List(list) => match list.handle_key(input) {
            Some(ListEvent::Open(chat_id)) => {
                info!("Opening chat {}", chat_id);
                app.screen = Screen::Chat(ChatRoom::new(chat_id.clone()));
                Effect::OpenChat(chat_id)
            }
            Some(ListEvent::SelectionChanged) | None => Effect::None,
        },
        Screen::Chat(room) => match room.editor.handle_key(input) {
            Some(EditorEvent::NavigateBack) => {
                info!("Leaving chat {}", room.chat_id);
                app.screen = Screen::List(ChatList::new());
                Effect::OpenList
            }
            Some(EditorEvent::Submit(text)) => Effect::Send {
                chat_id: room.chat_id.clone(),
                message: OutgoingMessage::new(&app.user_id, text, Utc::now()),
            },
            Some(EditorEvent::ContentChanged) | None => Effect::None,
        },
    }
}
