//! `ChatSource` over the chat server's HTTP API.
//!
//! ```text
//! GET  /api/chats              → ["id", ...]
//! GET  /api/chats/{id}         → {"title": ..., "messages": [...]}
//! GET  /api/chats/{id}/update  → same shape, held open until the chat changes
//! POST /api/chats/{id}         ← {"from": ..., "text": ..., "sentAt": ...}
//! ```
//!
//! `{id}` is always one percent-encoded segment, so ids containing `/`, `#`
//! or `?` still address their own chat.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Url;
use serde::de::DeserializeOwned;

use super::source::{ChatSource, ClientError};
use crate::core::message::{ChatUpdate, OutgoingMessage};

pub struct HttpChatSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpChatSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        info!("Chat server at {}", base_url);
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// `{base}/api/chats` followed by `segments`, each percent-encoded as a
    /// single path segment.
    fn api_url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let invalid = || ClientError::Network(format!("invalid server URL: {}", self.base_url));
        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(["api", "chats"])
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let response = check_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }
}

/// Turn a non-success response into `ClientError::Status`.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let reason = status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string());
    let body = response.text().await.ok();
    warn!("Chat server error: {} - {:?}", status.as_u16(), body);
    Err(ClientError::Status {
        status: status.as_u16(),
        body,
        reason,
    })
}

#[async_trait]
impl ChatSource for HttpChatSource {
    async fn list_chats(&self) -> Result<Vec<String>, ClientError> {
        self.get_json(self.api_url(&[])?).await
    }

    async fn load_chat(&self, chat_id: &str) -> Result<ChatUpdate, ClientError> {
        self.get_json(self.api_url(&[chat_id])?).await
    }

    async fn poll_update(&self, chat_id: &str) -> Result<ChatUpdate, ClientError> {
        self.get_json(self.api_url(&[chat_id, "update"])?).await
    }

    async fn send(&self, chat_id: &str, message: &OutgoingMessage) -> Result<(), ClientError> {
        let url = self.api_url(&[chat_id])?;
        debug!("POST {} ({} chars)", url, message.text.chars().count());
        let response = self
            .client
            .post(url)
            .json(message)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        check_status(response).await?;
        Ok(())
    }
}
