//! Wire types for the tutor service endpoints.
//!
//! Field names mirror the service's JSON exactly; no renaming happens at
//! this boundary.

use serde::{Deserialize, Serialize};

/// Request body for `POST /chat`.
///
/// `session_id` is serialized only once a session has been established —
/// the first message of a conversation omits the field entirely and the
/// service mints a fresh session.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<&'a str>,
}

/// Success body for `POST /chat`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub response: String,
    pub session_id: String,
}

/// Success body for `POST /chat/new`.
///
/// The service sends a human-readable `message` alongside the id; it is
/// tolerated but unused.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SessionCreated {
    pub session_id: String,
    #[serde(default)]
    pub message: String,
}

/// Error body the service attaches to non-2xx responses.
#[derive(Deserialize, Debug, Default)]
pub struct ErrorBody {
    pub detail: Option<String>,
}

/// Success body for `GET /health`. Logged, never acted on — the HTTP
/// status alone decides healthy/unhealthy.
#[derive(Deserialize, Debug)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub sessions_count: u64,
}
