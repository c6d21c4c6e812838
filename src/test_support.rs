//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{ApiError, ChatBackend, ChatReply, SessionCreated};

/// A canned backend for tests that don't need real HTTP calls.
pub struct StubBackend;

#[async_trait]
impl ChatBackend for StubBackend {
    async fn send_message(
        &self,
        message: &str,
        session_id: Option<&str>,
    ) -> Result<ChatReply, ApiError> {
        Ok(ChatReply {
            response: format!("echo: {message}"),
            session_id: session_id.unwrap_or("stub-session").to_string(),
        })
    }

    async fn create_session(&self) -> Result<SessionCreated, ApiError> {
        Ok(SessionCreated {
            session_id: "stub-session".to_string(),
            message: "New chat session created".to_string(),
        })
    }

    async fn check_health(&self) -> Result<(), ApiError> {
        Ok(())
    }
}

/// Creates a test App wired to a StubBackend.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(StubBackend), "http://localhost:8000".to_string())
}
