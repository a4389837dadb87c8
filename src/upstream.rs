// src/upstream.rs
//! Tolerant classification of the completions API response body.
//!
//! The upstream is not trusted to return one shape. Each recognized shape
//! gets its own variant; a parseable body of unknown shape is
//! `Unrecognized` and stringified as a last resort, so the user always
//! sees *some* answer text. Unparseable bodies and error payloads trigger
//! the local fallback instead.

use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamPayload {
    /// Standard chat completion: `choices[0].message.content`.
    ChatCompletion(String),
    /// Array of objects carrying `generated_text`.
    GeneratedTextList(String),
    /// Bare object with a `generated_text` field.
    GeneratedText(String),
    /// Array of plain strings; the first one is the answer.
    StringList(String),
    /// Body was a bare JSON string; its value is the answer.
    PlainText(String),
    /// `{"error": ...}` payload. Triggers the local fallback.
    ApiError(Value),
    /// Body did not parse as JSON at all. Triggers the local fallback.
    Malformed(String),
    /// Parsed JSON matching none of the known shapes.
    Unrecognized(Value),
}

/// First match wins, checked in order of how trustworthy the shape is.
pub fn classify(body: &str) -> UpstreamPayload {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => return UpstreamPayload::Malformed(body.to_string()),
    };

    if let Value::String(text) = value {
        return UpstreamPayload::PlainText(text);
    }

    if let Some(content) = value
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
    {
        return UpstreamPayload::ChatCompletion(content.to_string());
    }

    if value.is_array() {
        if let Some(text) = value.pointer("/0/generated_text").and_then(Value::as_str) {
            return UpstreamPayload::GeneratedTextList(text.to_string());
        }
    }

    if let Some(text) = value.get("generated_text").and_then(Value::as_str) {
        return UpstreamPayload::GeneratedText(text.to_string());
    }

    if let Some(text) = value
        .as_array()
        .and_then(|items| items.first())
        .and_then(Value::as_str)
    {
        return UpstreamPayload::StringList(text.to_string());
    }

    if let Some(error) = value.get("error").filter(|e| !e.is_null()) {
        return UpstreamPayload::ApiError(error.clone());
    }

    UpstreamPayload::Unrecognized(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chat_completion_content_round_trips() {
        let body = json!({
            "choices": [{"message": {"role": "assistant", "content": "Производная — это $f'(x)$."}}]
        })
        .to_string();
        assert_eq!(
            classify(&body),
            UpstreamPayload::ChatCompletion("Производная — это $f'(x)$.".to_string())
        );
    }

    #[test]
    fn generated_text_array() {
        let body = json!([{"generated_text": "answer"}]).to_string();
        assert_eq!(
            classify(&body),
            UpstreamPayload::GeneratedTextList("answer".to_string())
        );
    }

    #[test]
    fn generated_text_object() {
        let body = json!({"generated_text": "answer"}).to_string();
        assert_eq!(
            classify(&body),
            UpstreamPayload::GeneratedText("answer".to_string())
        );
    }

    #[test]
    fn array_of_strings() {
        let body = json!(["first", "second"]).to_string();
        assert_eq!(
            classify(&body),
            UpstreamPayload::StringList("first".to_string())
        );
    }

    #[test]
    fn non_json_body_is_malformed() {
        assert_eq!(
            classify("<html>502 Bad Gateway</html>"),
            UpstreamPayload::Malformed("<html>502 Bad Gateway</html>".to_string())
        );
    }

    #[test]
    fn json_string_body_is_plain_text() {
        assert_eq!(
            classify("\"just a string\""),
            UpstreamPayload::PlainText("just a string".to_string())
        );
    }

    #[test]
    fn error_object_is_api_error() {
        let body = json!({"error": {"message": "insufficient quota", "code": 402}}).to_string();
        match classify(&body) {
            UpstreamPayload::ApiError(error) => {
                assert_eq!(error["message"], "insufficient quota");
            }
            other => panic!("expected ApiError, got {:?}", other),
        }
    }

    #[test]
    fn null_error_field_is_not_an_error() {
        let body = json!({"error": null, "usage": {}}).to_string();
        assert!(matches!(classify(&body), UpstreamPayload::Unrecognized(_)));
    }

    #[test]
    fn unknown_shape_is_unrecognized() {
        let body = json!({"usage": {"total_tokens": 12}}).to_string();
        match classify(&body) {
            UpstreamPayload::Unrecognized(value) => {
                assert_eq!(value["usage"]["total_tokens"], 12);
            }
            other => panic!("expected Unrecognized, got {:?}", other),
        }
    }

    #[test]
    fn completion_beats_error_field() {
        let body = json!({
            "choices": [{"message": {"content": "ok"}}],
            "error": {"message": "ignored"}
        })
        .to_string();
        assert_eq!(classify(&body), UpstreamPayload::ChatCompletion("ok".to_string()));
    }
}
