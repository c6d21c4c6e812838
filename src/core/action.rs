//! # Actions
//!
//! Everything that can happen in Sage becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! The service answers? That's `Action::ChatCompleted(result)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns the `Effect` the adapter must perform. No I/O
//! here — the TUI spawns the actual HTTP calls and feeds their results
//! back in as completion actions.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: feed actions, assert on state and
//! effects, no terminal and no network required.

use log::{info, warn};

use crate::api::{ApiError, ChatReply, SessionCreated};
use crate::core::input;
use crate::core::state::{App, StatusKind};

/// Remediation shown when the service reports its credential is unset.
/// Rendered through the inline-markup chain like any tutor message.
const API_KEY_HELP: &str = "**API configuration required**\n\n\
The chat service has no OpenRouter API key set. To get it talking:\n\n\
1. Get a free API key from https://openrouter.ai\n\
2. Set `OPENROUTER_API_KEY=your_key_here` in the service environment\n\
3. Restart the service\n\n\
For local runs, a `.env` file next to the service works too.";

const GENERIC_APOLOGY: &str = "Sorry, I encountered an error. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The user asked to send the input buffer.
    Submit(String),
    /// A `POST /chat` finished, successfully or not.
    ChatCompleted(Result<ChatReply, ApiError>),
    /// The user asked for a fresh session.
    NewChat,
    /// A `POST /chat/new` finished, successfully or not.
    NewChatCompleted(Result<SessionCreated, ApiError>),
    /// The user asked to wipe the transcript.
    ClearChat,
    /// The startup health probe finished.
    HealthChecked(bool),
    Quit,
}

/// What the adapter must do after an `update()` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Spawn a `POST /chat` with this payload.
    SendChat {
        message: String,
        session_id: Option<String>,
    },
    /// Spawn a `POST /chat/new`.
    CreateSession,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(text) => {
            // Authoritative gate: trimmed non-empty AND not loading.
            if !input::can_send(&text, app.is_loading) {
                return Effect::None;
            }
            let message = text.trim().to_string();
            app.transcript.push_user(message.clone());
            app.begin_loading();
            Effect::SendChat {
                session_id: app.session_id.clone(),
                message,
            }
        }

        Action::ChatCompleted(Ok(reply)) => {
            info!("chat reply received (session: {})", reply.session_id);
            app.session_id = Some(reply.session_id);
            app.transcript.push_tutor(reply.response);
            app.finish_loading();
            Effect::None
        }

        Action::ChatCompleted(Err(err)) => {
            warn!("chat request failed: {err}");
            app.transcript.push_error(failure_message(&err));
            app.is_loading = false;
            app.set_status(failure_status(&err), StatusKind::Error);
            Effect::None
        }

        Action::NewChat => {
            if app.is_loading {
                return Effect::None;
            }
            app.begin_loading();
            Effect::CreateSession
        }

        Action::NewChatCompleted(Ok(created)) => {
            info!("new session: {}", created.session_id);
            app.session_id = Some(created.session_id);
            app.transcript.clear();
            app.is_loading = false;
            app.set_status("New chat started!", StatusKind::Normal);
            Effect::None
        }

        Action::NewChatCompleted(Err(err)) => {
            warn!("new chat failed: {err}");
            // Status-only failure: transcript and session stay untouched.
            app.is_loading = false;
            app.set_status("Failed to start new chat", StatusKind::Error);
            Effect::None
        }

        Action::ClearChat => {
            app.transcript.clear();
            app.session_id = None;
            app.set_status("Chat cleared", StatusKind::Normal);
            Effect::None
        }

        Action::HealthChecked(healthy) => {
            if !healthy {
                app.set_status("API connection issue", StatusKind::Error);
            }
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}

/// Transcript text for a failed send.
fn failure_message(err: &ApiError) -> String {
    match err {
        ApiError::ApiKeyMissing => API_KEY_HELP.to_string(),
        ApiError::Api { status, detail } => format!(
            "**API error** (HTTP {status}): {}",
            detail.as_deref().unwrap_or("Unknown error")
        ),
        ApiError::Network(_) | ApiError::Parse(_) => GENERIC_APOLOGY.to_string(),
    }
}

/// Status line for a failed send.
fn failure_status(err: &ApiError) -> &'static str {
    match err {
        ApiError::ApiKeyMissing => "API key required",
        _ => "Error occurred",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transcript::Sender;
    use crate::test_support::test_app;

    fn reply(text: &str, session: &str) -> ChatReply {
        ChatReply {
            response: text.to_string(),
            session_id: session.to_string(),
        }
    }

    #[test]
    fn submit_pushes_user_message_and_requests_send() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Submit("Hello".to_string()));

        assert_eq!(
            effect,
            Effect::SendChat {
                message: "Hello".to_string(),
                session_id: None,
            }
        );
        assert!(app.is_loading);
        assert_eq!(app.status.text, "Thinking...");
        assert_eq!(app.transcript.len(), 1);
        assert_eq!(app.transcript.messages[0].sender, Sender::User);
        assert_eq!(app.transcript.messages[0].content, "Hello");
    }

    #[test]
    fn submit_trims_before_sending() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Submit("  Hello  \n".to_string()));
        assert_eq!(
            effect,
            Effect::SendChat {
                message: "Hello".to_string(),
                session_id: None,
            }
        );
    }

    #[test]
    fn submit_refused_while_loading() {
        let mut app = test_app();
        app.begin_loading();
        let effect = update(&mut app, Action::Submit("Hello".to_string()));
        assert_eq!(effect, Effect::None);
        assert!(app.transcript.is_empty());
    }

    #[test]
    fn submit_refused_for_whitespace() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Submit("   ".to_string()));
        assert_eq!(effect, Effect::None);
        assert!(app.transcript.is_empty());
        assert!(!app.is_loading);
    }

    #[test]
    fn established_session_id_rides_along_on_next_send() {
        let mut app = test_app();
        update(&mut app, Action::Submit("Hello".to_string()));
        update(&mut app, Action::ChatCompleted(Ok(reply("Hi!", "abc"))));

        let effect = update(&mut app, Action::Submit("And again".to_string()));
        assert_eq!(
            effect,
            Effect::SendChat {
                message: "And again".to_string(),
                session_id: Some("abc".to_string()),
            }
        );
    }

    #[test]
    fn chat_success_appends_tutor_message_and_restores_ready() {
        let mut app = test_app();
        update(&mut app, Action::Submit("Hello".to_string()));
        let effect = update(&mut app, Action::ChatCompleted(Ok(reply("Hi there!", "abc"))));

        assert_eq!(effect, Effect::None);
        assert!(!app.is_loading);
        assert_eq!(app.status.text, "Ready to help!");
        assert_eq!(app.session_id.as_deref(), Some("abc"));
        assert_eq!(app.transcript.len(), 2);
        let msg = &app.transcript.messages[1];
        assert_eq!(msg.sender, Sender::Tutor);
        assert_eq!(msg.content, "Hi there!");
        assert!(!msg.is_error);
    }

    #[test]
    fn missing_api_key_renders_remediation_steps() {
        let mut app = test_app();
        update(&mut app, Action::Submit("Hello".to_string()));
        update(&mut app, Action::ChatCompleted(Err(ApiError::ApiKeyMissing)));

        assert!(!app.is_loading);
        assert_eq!(app.status.text, "API key required");
        assert_eq!(app.status.kind, StatusKind::Error);

        let msg = app.transcript.messages.last().unwrap();
        assert!(msg.is_error);
        assert!(msg.content.contains("openrouter.ai"));
        assert!(msg.content.contains("OPENROUTER_API_KEY"));
        assert!(msg.content.contains("Restart the service"));
    }

    #[test]
    fn http_failure_renders_status_code_and_detail() {
        let mut app = test_app();
        update(&mut app, Action::Submit("Hello".to_string()));
        update(
            &mut app,
            Action::ChatCompleted(Err(ApiError::Api {
                status: 503,
                detail: Some("Service unavailable".to_string()),
            })),
        );

        let msg = app.transcript.messages.last().unwrap();
        assert!(msg.is_error);
        assert!(msg.content.contains("503"));
        assert!(msg.content.contains("Service unavailable"));
        assert_eq!(app.status.text, "Error occurred");
        assert_eq!(app.status.kind, StatusKind::Error);
    }

    #[test]
    fn http_failure_without_detail_gets_fallback_text() {
        let mut app = test_app();
        update(&mut app, Action::Submit("Hello".to_string()));
        update(
            &mut app,
            Action::ChatCompleted(Err(ApiError::Api {
                status: 502,
                detail: None,
            })),
        );
        let msg = app.transcript.messages.last().unwrap();
        assert!(msg.content.contains("502"));
        assert!(msg.content.contains("Unknown error"));
    }

    #[test]
    fn transport_failure_gets_generic_apology() {
        let mut app = test_app();
        update(&mut app, Action::Submit("Hello".to_string()));
        update(
            &mut app,
            Action::ChatCompleted(Err(ApiError::Network("connection refused".to_string()))),
        );

        let msg = app.transcript.messages.last().unwrap();
        assert!(msg.is_error);
        assert_eq!(msg.content, "Sorry, I encountered an error. Please try again.");
        assert!(!app.is_loading);
        assert_eq!(app.status.text, "Error occurred");
    }

    #[test]
    fn clear_chat_resets_transcript_session_and_status() {
        let mut app = test_app();
        update(&mut app, Action::Submit("one".to_string()));
        update(&mut app, Action::ChatCompleted(Ok(reply("reply one", "abc"))));
        update(&mut app, Action::Submit("two".to_string()));
        update(&mut app, Action::ChatCompleted(Ok(reply("reply two", "abc"))));
        assert_eq!(app.transcript.len(), 4);

        let effect = update(&mut app, Action::ClearChat);
        assert_eq!(effect, Effect::None);
        assert!(app.transcript.is_empty());
        assert!(app.session_id.is_none());
        assert_eq!(app.status.text, "Chat cleared");
        assert_eq!(app.status.kind, StatusKind::Normal);
    }

    #[test]
    fn new_chat_requests_a_session_and_enters_loading() {
        let mut app = test_app();
        let effect = update(&mut app, Action::NewChat);
        assert_eq!(effect, Effect::CreateSession);
        assert!(app.is_loading);
    }

    #[test]
    fn new_chat_refused_while_send_in_flight() {
        let mut app = test_app();
        update(&mut app, Action::Submit("Hello".to_string()));
        assert!(app.is_loading);

        let effect = update(&mut app, Action::NewChat);
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn new_chat_success_replaces_session_and_clears_transcript() {
        let mut app = test_app();
        update(&mut app, Action::Submit("Hello".to_string()));
        update(&mut app, Action::ChatCompleted(Ok(reply("Hi!", "old"))));

        update(&mut app, Action::NewChat);
        update(
            &mut app,
            Action::NewChatCompleted(Ok(SessionCreated {
                session_id: "fresh".to_string(),
                message: "New chat session created".to_string(),
            })),
        );

        assert_eq!(app.session_id.as_deref(), Some("fresh"));
        assert!(app.transcript.is_empty());
        assert!(!app.is_loading);
        assert_eq!(app.status.text, "New chat started!");
        assert_eq!(app.status.kind, StatusKind::Normal);
    }

    #[test]
    fn new_chat_failure_leaves_state_untouched_except_status() {
        let mut app = test_app();
        update(&mut app, Action::Submit("Hello".to_string()));
        update(&mut app, Action::ChatCompleted(Ok(reply("Hi!", "abc"))));

        update(&mut app, Action::NewChat);
        update(
            &mut app,
            Action::NewChatCompleted(Err(ApiError::Api {
                status: 500,
                detail: None,
            })),
        );

        assert_eq!(app.session_id.as_deref(), Some("abc"));
        assert_eq!(app.transcript.len(), 2);
        assert!(!app.is_loading);
        assert_eq!(app.status.text, "Failed to start new chat");
        assert_eq!(app.status.kind, StatusKind::Error);
    }

    #[test]
    fn failed_health_probe_downgrades_status_only() {
        let mut app = test_app();
        let effect = update(&mut app, Action::HealthChecked(false));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.status.text, "API connection issue");
        assert_eq!(app.status.kind, StatusKind::Error);
        // Sends are still allowed afterwards.
        let effect = update(&mut app, Action::Submit("still works".to_string()));
        assert!(matches!(effect, Effect::SendChat { .. }));
    }

    #[test]
    fn healthy_probe_changes_nothing() {
        let mut app = test_app();
        update(&mut app, Action::HealthChecked(true));
        assert_eq!(app.status.text, "Ready to help!");
        assert_eq!(app.status.kind, StatusKind::Normal);
    }

    #[test]
    fn quit_returns_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
