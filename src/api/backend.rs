use std::fmt;

use async_trait::async_trait;

use super::types::{ChatReply, SessionCreated};

/// Failures a backend call can produce.
/// Variants carry enough info for the reducer to pick a user-facing message.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The service reports its upstream credential is unset (the
    /// distinguished 500 + detail case). Needs operator action.
    ApiKeyMissing,
    /// Any other non-2xx response, with the service's detail if it sent one.
    Api { status: u16, detail: Option<String> },
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// Response body did not match the expected shape.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::ApiKeyMissing => write!(f, "service API key not configured"),
            ApiError::Api { status, detail } => match detail {
                Some(d) => write!(f, "API error (HTTP {status}): {d}"),
                None => write!(f, "API error (HTTP {status})"),
            },
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Everything the app needs from the tutor service.
///
/// The trait seam exists so the core can be exercised with a stub in
/// tests; `HttpBackend` is the only production implementation.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// `POST /chat` — send a message, optionally continuing a session.
    async fn send_message(
        &self,
        message: &str,
        session_id: Option<&str>,
    ) -> Result<ChatReply, ApiError>;

    /// `POST /chat/new` — ask the service for a fresh session.
    async fn create_session(&self) -> Result<SessionCreated, ApiError>;

    /// `GET /health` — one-shot liveness probe. Ok iff the service
    /// answered with a 2xx.
    async fn check_health(&self) -> Result<(), ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_and_detail() {
        let err = ApiError::Api {
            status: 503,
            detail: Some("Service unavailable".to_string()),
        };
        let text = err.to_string();
        assert!(text.contains("503"));
        assert!(text.contains("Service unavailable"));
    }

    #[test]
    fn display_without_detail() {
        let err = ApiError::Api {
            status: 502,
            detail: None,
        };
        assert_eq!(err.to_string(), "API error (HTTP 502)");
    }
}
