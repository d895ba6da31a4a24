//! Normalized error taxonomy for the client layer.
//!
//! Every transport failure and non-2xx response maps into one
//! `ApiError`; callers never see the underlying exception type, only
//! a failure with a message.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// 401. Navigation to login is the application shell's decision,
    /// not this crate's.
    #[error("unauthorized")]
    Unauthorized,

    /// 404 on a single-record operation.
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other non-2xx response.
    #[error("request failed ({status}): {message}")]
    Server { status: u16, message: String },

    /// Network unreachable, timeout, connection reset.
    #[error("transport error: {0}")]
    Transport(String),

    /// 2xx body that does not parse into the expected type.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Strict mode only: list payload matched none of the resource's
    /// envelope candidates.
    #[error("unexpected response envelope for {resource}")]
    UnexpectedEnvelope { resource: &'static str },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return ApiError::Transport("request timed out".to_string());
        }
        ApiError::Transport(err.to_string())
    }
}

/// Extract a human-readable message from a response body, in priority
/// order: structured `message`/`error` field, then the raw body.
/// Returns `None` for an empty body so the caller can fall back to a
/// generic message.
pub(crate) fn message_from_body(body: &str) -> Option<String> {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                if !text.is_empty() {
                    return Some(text.to_string());
                }
            }
        }
        // structured but non-string message field: stringify it
        if let Some(field) = value.get("message") {
            if !field.is_null() {
                return Some(field.to_string());
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
