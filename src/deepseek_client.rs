// src/deepseek_client.rs
//! Thin client for the DeepSeek chat-completions API.
//!
//! The response body is read as text, not deserialized here: the upstream
//! sometimes returns non-JSON (HTML error pages, plain text), and the
//! tolerant shape classification lives in `upstream`.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEEPSEEK_MODEL: &str = "deepseek-chat";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

/// Status and raw body of an upstream reply, before shape classification.
#[derive(Debug)]
pub struct RawReply {
    pub status: StatusCode,
    pub body: String,
}

#[derive(Debug, Error)]
pub enum DeepSeekError {
    #[error("DeepSeek request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct DeepSeekClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl DeepSeekClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: "https://api.deepseek.com/v1".to_string(),
            model: DEEPSEEK_MODEL.to_string(),
        }
    }

    /// Sends the accumulated history and returns whatever came back.
    /// No retries and no explicit timeout; a failed call is absorbed into
    /// the local fallback by the caller.
    pub async fn chat(&self, messages: Vec<ChatMessage>) -> Result<RawReply, DeepSeekError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages,
        };

        tracing::debug!("DeepSeek request: {} messages", request.messages.len());

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .header("accept", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(status = %status, bytes = body.len(), "DeepSeek response received");

        Ok(RawReply { status, body })
    }
}
