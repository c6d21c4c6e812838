//! # Application State
//!
//! Core business state for Sage. This module contains domain state only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── backend: Arc<dyn ChatBackend>   // tutor service client
//! ├── transcript: Transcript          // current conversation
//! ├── session_id: Option<String>      // service-issued session token
//! ├── is_loading: bool                // a send or new-chat is in flight
//! ├── status: Status                  // title bar text + kind
//! └── server_url: String              // resolved base URL (display only)
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::api::ChatBackend;
use crate::core::config::ResolvedConfig;
use crate::core::transcript::Transcript;

pub const READY_STATUS: &str = "Ready to help!";
pub const THINKING_STATUS: &str = "Thinking...";

/// How the status line should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Normal,
    Thinking,
    Error,
}

/// The single status slot. Always overwritten wholesale — there is no
/// stacking or history.
#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    pub text: String,
    pub kind: StatusKind,
}

impl Status {
    pub fn ready() -> Self {
        Self {
            text: READY_STATUS.to_string(),
            kind: StatusKind::Normal,
        }
    }
}

pub struct App {
    pub backend: Arc<dyn ChatBackend>,
    pub transcript: Transcript,
    /// Opaque token from the service. None until the first successful
    /// exchange; reset by clear/new-chat, never expires on its own.
    pub session_id: Option<String>,
    pub is_loading: bool,
    pub status: Status,
    pub server_url: String,
}

impl App {
    pub fn new(backend: Arc<dyn ChatBackend>, server_url: String) -> Self {
        Self {
            backend,
            transcript: Transcript::new(),
            session_id: None,
            is_loading: false,
            status: Status::ready(),
            server_url,
        }
    }

    pub fn from_config(backend: Arc<dyn ChatBackend>, config: &ResolvedConfig) -> Self {
        Self::new(backend, config.server_url.clone())
    }

    pub fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = Status {
            text: text.into(),
            kind,
        };
    }

    /// Enter the loading phase: blocks further sends until the matching
    /// completion action arrives.
    pub fn begin_loading(&mut self) {
        self.is_loading = true;
        self.set_status(THINKING_STATUS, StatusKind::Thinking);
    }

    /// Leave the loading phase and restore the ready status.
    pub fn finish_loading(&mut self) {
        self.is_loading = false;
        self.status = Status::ready();
    }
}

#[cfg(test)]
mod tests {
    use crate::core::state::StatusKind;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status.text, "Ready to help!");
        assert_eq!(app.status.kind, StatusKind::Normal);
        assert!(!app.is_loading);
        assert!(app.session_id.is_none());
        assert!(app.transcript.is_empty());
    }

    #[test]
    fn test_loading_transitions() {
        let mut app = test_app();
        app.begin_loading();
        assert!(app.is_loading);
        assert_eq!(app.status.text, "Thinking...");
        assert_eq!(app.status.kind, StatusKind::Thinking);

        app.finish_loading();
        assert!(!app.is_loading);
        assert_eq!(app.status.text, "Ready to help!");
    }
}
