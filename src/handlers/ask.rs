// src/handlers/ask.rs
//! The ask endpoint: the one piece of server logic. Validates the question,
//! assembles per-subject history, proxies to DeepSeek and absorbs every
//! upstream failure into a canned local answer. Apart from the missing
//! question case the endpoint always answers 200 with some answer text.

use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use reqwest::StatusCode as UpstreamStatus;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::fallback::local_answer;
use crate::language;
use crate::subjects::{self, Subject};
use crate::upstream::{self, UpstreamPayload};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl AskResponse {
    fn answer(answer: String) -> Self {
        Self { answer, fallback: None, error: None, details: None }
    }

    fn fallback(answer: String, error: Value, details: Option<Value>) -> Self {
        Self { answer, fallback: Some(true), error: Some(error), details }
    }
}

pub fn ask_routes() -> Router {
    Router::new().route("/api/ask", post(ask))
}

/// POST /api/ask - body `{subject, question}`
pub async fn ask(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<AskRequest>,
) -> Response {
    if request.question.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": "Missing question"})),
        )
            .into_response();
    }

    let subject = Subject::from_key(&request.subject);
    let lang = language::detect(&request.question);

    // Holding the subject's lock across the upstream call serializes
    // concurrent requests on the same subject.
    let slot = state.chats.subject(&request.subject);
    let mut history = slot.lock().await;

    if history.is_empty() {
        history.seed(subjects::system_prompt(subject, lang));
    }
    history.push_user(request.question.clone());

    let response = match &state.deepseek_client {
        Some(client) => match client.chat(history.messages().to_vec()).await {
            Ok(reply) => resolve_reply(reply.status, &reply.body, subject, &request.question),
            Err(e) => {
                tracing::error!(subject = %request.subject, "DeepSeek request failed: {}", e);
                AskResponse::fallback(
                    local_answer(subject, &request.question),
                    Value::String(e.to_string()),
                    None,
                )
            }
        },
        None => {
            tracing::warn!(subject = %request.subject, "DeepSeek client not configured, answering locally");
            AskResponse::fallback(
                local_answer(subject, &request.question),
                Value::String("DeepSeek client not configured".to_string()),
                None,
            )
        }
    };

    // Fallback answers go into history too, so the conversation keeps its
    // continuity during degraded operation.
    history.push_assistant(response.answer.clone());

    (StatusCode::OK, Json(response)).into_response()
}

/// Maps a raw upstream reply to the response payload. Non-success statuses
/// and error payloads become fallbacks; every recognized or tolerated shape
/// becomes the answer.
fn resolve_reply(
    status: UpstreamStatus,
    body: &str,
    subject: Option<Subject>,
    question: &str,
) -> AskResponse {
    if !status.is_success() {
        let details =
            serde_json::from_str::<Value>(body).unwrap_or_else(|_| Value::String(body.to_string()));
        tracing::error!(status = %status, "DeepSeek returned non-success status");
        return AskResponse::fallback(
            local_answer(subject, question),
            Value::String(format!("DeepSeek API error {}", status)),
            Some(details),
        );
    }

    match upstream::classify(body) {
        UpstreamPayload::ChatCompletion(text)
        | UpstreamPayload::GeneratedTextList(text)
        | UpstreamPayload::GeneratedText(text)
        | UpstreamPayload::StringList(text)
        | UpstreamPayload::PlainText(text) => AskResponse::answer(text),
        UpstreamPayload::Unrecognized(value) => AskResponse::answer(value.to_string()),
        UpstreamPayload::ApiError(error) => {
            tracing::error!("DeepSeek returned error payload: {}", error);
            AskResponse::fallback(local_answer(subject, question), error, None)
        }
        UpstreamPayload::Malformed(raw) => {
            tracing::error!("DeepSeek returned unparseable body ({} bytes)", raw.len());
            AskResponse::fallback(
                local_answer(subject, question),
                Value::String("DeepSeek returned a malformed response".to_string()),
                Some(Value::String(raw)),
            )
        }
    }
}
