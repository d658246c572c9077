use std::fmt;

use async_trait::async_trait;

use crate::core::message::{ChatUpdate, OutgoingMessage};

/// Errors from talking to the chat server.
///
/// `Display` is the exact string shown on screen after "ERROR: ".
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Transport failure (connection refused, DNS, reset). Carries the
    /// underlying description.
    Network(String),
    /// Non-success status. `body` is `None` when it could not be read;
    /// `reason` is the canonical status phrase.
    Status {
        status: u16,
        body: Option<String>,
        reason: String,
    },
    /// The response body was not the JSON we expected.
    Parse(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Network(msg) => write!(f, "{msg}"),
            ClientError::Status {
                status,
                body: Some(body),
                ..
            } => write!(f, "{status}: {body}"),
            ClientError::Status {
                body: None, reason, ..
            } => write!(f, "{reason}"),
            ClientError::Parse(msg) => write!(f, "invalid response: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {}

/// Where chats come from. The TUI only ever talks to this trait, so tests
/// can script responses without a server.
#[async_trait]
pub trait ChatSource: Send + Sync {
    /// Ids of every chat on the server.
    async fn list_chats(&self) -> Result<Vec<String>, ClientError>;

    /// Full snapshot of one chat.
    async fn load_chat(&self, chat_id: &str) -> Result<ChatUpdate, ClientError>;

    /// Long-poll: resolves with the next snapshot after the chat changes.
    async fn poll_update(&self, chat_id: &str) -> Result<ChatUpdate, ClientError>;

    async fn send(&self, chat_id: &str, message: &OutgoingMessage) -> Result<(), ClientError>;
}
