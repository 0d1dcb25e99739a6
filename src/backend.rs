//! HTTP client for the document-chat backend.
//!
//! The backend owns every hard part of the product (parsing, embeddings,
//! retrieval, answer generation); this client only speaks its two endpoints:
//! `POST /upload` (multipart) and `POST /chat` (JSON), both keyed by the
//! client-generated session id.

use crate::session::SessionId;
use serde::{Deserialize, Serialize};

/// Hosted backend used when no override is configured.
const DEFAULT_ENDPOINT: &str = "https://document-chat-backend.vercel.app";

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Network or transport failure before a body could be read.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered and reported a failure.
    #[error("{0}")]
    Rejected(String),

    /// The backend answered 2xx but the body lacks the expected field.
    #[error("unexpected response from backend: {0}")]
    Malformed(String),
}

pub type BackendResult<T> = Result<T, BackendError>;

/// Wire format for `POST /chat`.
#[derive(Serialize)]
pub struct ChatRequest<'a> {
    pub question: &'a str,
    #[serde(rename = "sessionId")]
    pub session_id: &'a str,
}

#[derive(Deserialize)]
struct UploadAck {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct ChatReply {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Endpoint from `DOCTALK_ENDPOINT`, falling back to the hosted backend.
    pub fn from_env() -> Self {
        let base =
            std::env::var("DOCTALK_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self::new(base)
    }

    /// Upload a document together with the session id that later questions
    /// will be keyed by.
    pub async fn upload_document(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        session: &SessionId,
    ) -> BackendResult<()> {
        use reqwest::multipart::{Form, Part};

        tracing::info!(file = %file_name, size = bytes.len(), "uploading document");

        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type_for(file_name))?;
        let form = Form::new()
            .part("document", part)
            .text("sessionId", session.to_string());

        let res = self
            .http
            .post(format!("{}/upload", self.base_url))
            .multipart(form)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(BackendError::Rejected(rejection_message(&body, status)));
        }
        parse_upload_body(&body)
    }

    /// Ask a question about the document behind `session`.
    pub async fn ask(&self, question: &str, session: &SessionId) -> BackendResult<String> {
        let res = self
            .http
            .post(format!("{}/chat", self.base_url))
            .json(&ChatRequest {
                question,
                session_id: session.as_str(),
            })
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(BackendError::Rejected(rejection_message(&body, status)));
        }
        parse_chat_body(&body)
    }
}

/// Best-effort MIME type from the file extension. The picker only offers
/// these three types; dropped files can be anything.
pub fn content_type_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        _ => "application/octet-stream",
    }
}

/// Message shown for a non-2xx response: the backend's `error` field when
/// present, otherwise the raw body, otherwise the status line.
pub fn rejection_message(body: &str, status: reqwest::StatusCode) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.error;
    }
    if body.trim().is_empty() {
        return format!("backend returned {status}");
    }
    body.to_string()
}

/// Interpret a 2xx `/upload` body: `{ "success": true, ... }` is the only
/// accepted shape.
pub fn parse_upload_body(body: &str) -> BackendResult<()> {
    match serde_json::from_str::<UploadAck>(body) {
        Ok(ack) if ack.success => Ok(()),
        Ok(ack) => Err(BackendError::Rejected(
            ack.error.unwrap_or_else(|| body.to_string()),
        )),
        Err(_) => Err(BackendError::Malformed(body.to_string())),
    }
}

/// Interpret a 2xx `/chat` body: `{ "response": "..." }`.
pub fn parse_chat_body(body: &str) -> BackendResult<String> {
    match serde_json::from_str::<ChatReply>(body) {
        Ok(ChatReply {
            response: Some(response),
            ..
        }) => Ok(response),
        Ok(ChatReply {
            error: Some(error), ..
        }) => Err(BackendError::Rejected(error)),
        _ => Err(BackendError::Malformed(body.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_uses_camel_case_session_key() {
        let request = ChatRequest {
            question: "what is this about?",
            session_id: "abc-123",
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["question"], "what is this about?");
        assert_eq!(value["sessionId"], "abc-123");
    }

    #[test]
    fn upload_body_success() {
        assert!(parse_upload_body(r#"{"success": true}"#).is_ok());
        assert!(parse_upload_body(r#"{"success": true, "chunks": 12}"#).is_ok());
    }

    #[test]
    fn upload_body_rejection_prefers_error_field() {
        let err = parse_upload_body(r#"{"success": false, "error": "unsupported type"}"#)
            .unwrap_err();
        assert!(matches!(err, BackendError::Rejected(msg) if msg == "unsupported type"));
    }

    #[test]
    fn upload_body_rejection_without_error_field_keeps_raw_body() {
        let err = parse_upload_body(r#"{"success": false}"#).unwrap_err();
        assert!(matches!(err, BackendError::Rejected(msg) if msg == r#"{"success": false}"#));
    }

    #[test]
    fn upload_body_that_is_not_json_is_malformed() {
        let err = parse_upload_body("<html>gateway timeout</html>").unwrap_err();
        assert!(matches!(err, BackendError::Malformed(_)));
    }

    #[test]
    fn chat_body_with_response() {
        let reply = parse_chat_body(r#"{"response": "It is a lease agreement."}"#).unwrap();
        assert_eq!(reply, "It is a lease agreement.");
    }

    #[test]
    fn chat_body_with_error_field_is_rejected() {
        let err = parse_chat_body(r#"{"error": "session expired"}"#).unwrap_err();
        assert!(matches!(err, BackendError::Rejected(msg) if msg == "session expired"));
    }

    #[test]
    fn chat_body_missing_response_is_malformed() {
        let err = parse_chat_body(r#"{"answer": "wrong key"}"#).unwrap_err();
        assert!(matches!(err, BackendError::Malformed(_)));
    }

    #[test]
    fn rejection_message_fallback_chain() {
        let status = reqwest::StatusCode::BAD_GATEWAY;
        assert_eq!(
            rejection_message(r#"{"error": "no session"}"#, status),
            "no session"
        );
        assert_eq!(rejection_message("plain text failure", status), "plain text failure");
        assert_eq!(
            rejection_message("   ", status),
            "backend returned 502 Bad Gateway"
        );
    }

    #[test]
    fn content_types_follow_the_picker_extensions() {
        assert_eq!(content_type_for("report.pdf"), "application/pdf");
        assert_eq!(content_type_for("REPORT.PDF"), "application/pdf");
        assert_eq!(content_type_for("notes.doc"), "application/msword");
        assert_eq!(
            content_type_for("thesis.docx"),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(content_type_for("archive.zip"), "application/octet-stream");
        assert_eq!(content_type_for("no-extension"), "application/octet-stream");
    }
}
