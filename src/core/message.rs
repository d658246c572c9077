//! # Chat Data
//!
//! Wire types shared by the HTTP client and the state reducer. Field names
//! follow the server's JSON (`from`, `text`, `sentAt`).

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A received chat message. Never mutated after it arrives.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Message {
    pub from: String,
    pub text: String,
    /// Sender-supplied timestamp, kept verbatim.
    #[serde(rename = "sentAt", default)]
    pub sent_at: String,
}

/// A (possibly partial) chat snapshot from the server.
///
/// Absent fields leave the current value untouched when applied.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ChatUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub messages: Option<Vec<Message>>,
}

/// A message on its way to the server.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct OutgoingMessage {
    pub from: String,
    pub text: String,
    #[serde(rename = "sentAt")]
    pub sent_at: String,
}

impl OutgoingMessage {
    pub fn new(from: &str, text: String, sent_at: DateTime<Utc>) -> Self {
        Self {
            from: from.to_string(),
            text,
            sent_at: sent_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
