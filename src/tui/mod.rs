//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! translates keyboard events into `core::Action` values. All HTTP work
//! the reducer requests (via `Effect`) is spawned here on tokio tasks,
//! which report back through an mpsc channel as completion actions.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (welcome screen, waiting on the service): draws every
//!   ~80ms for smooth animation.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor
//! because ratatui's `set_cursor_position` resets the terminal's blink
//! timer on every `draw()` call, making blinking cursors appear erratic
//! during continuous redraws.

pub mod component;
pub mod components;
pub mod event;
pub mod markup;
pub mod ui;

use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use log::{debug, info, warn};

use crate::api::{ChatBackend, HttpBackend};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, MessageListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub message_list: MessageListState,
    pub input_box: InputBox,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            message_list: MessageListState::new(),
            input_box: InputBox::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let backend: Arc<dyn ChatBackend> = Arc::new(HttpBackend::new(config.server_url.clone()));
    let mut app = App::from_config(backend, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for completion actions from background tasks
    let (tx, rx) = mpsc::channel();

    // One-shot health probe; failures only downgrade the status line
    spawn_health_probe(app.backend.clone(), tx.clone());

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    'outer: loop {
        let animating = app.is_loading || app.transcript.is_empty();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                TuiEvent::Resize | TuiEvent::Redraw => {} // already flagged above

                TuiEvent::ForceQuit => {
                    if update(&mut app, Action::Quit) == Effect::Quit {
                        break 'outer;
                    }
                }

                TuiEvent::NewChat => {
                    if update(&mut app, Action::NewChat) == Effect::CreateSession {
                        spawn_new_session(app.backend.clone(), tx.clone());
                    }
                }

                TuiEvent::ClearChat => {
                    update(&mut app, Action::ClearChat);
                    tui.message_list = MessageListState::new();
                }

                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown => {
                    tui.message_list.handle_event(&event);
                }

                // Enter while loading is refused up front so the typed
                // text survives in the buffer.
                TuiEvent::Submit if app.is_loading => {}

                _ => {
                    if let Some(InputEvent::Submit(text)) = tui.input_box.handle_event(&event) {
                        if let Effect::SendChat {
                            message,
                            session_id,
                        } = update(&mut app, Action::Submit(text))
                        {
                            spawn_chat_request(app.backend.clone(), message, session_id, tx.clone());
                        }
                    }
                }
            }
        }

        // Handle completion actions from background tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            // Completion actions never request follow-up effects
            update(&mut app, action);
        }
    }

    ratatui::restore();
    Ok(())
}

fn spawn_chat_request(
    backend: Arc<dyn ChatBackend>,
    message: String,
    session_id: Option<String>,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning chat request");
    tokio::spawn(async move {
        let result = backend.send_message(&message, session_id.as_deref()).await;
        if tx.send(Action::ChatCompleted(result)).is_err() {
            warn!("Failed to send chat completion: receiver dropped");
        }
    });
}

fn spawn_new_session(backend: Arc<dyn ChatBackend>, tx: mpsc::Sender<Action>) {
    info!("Spawning new session request");
    tokio::spawn(async move {
        let result = backend.create_session().await;
        if tx.send(Action::NewChatCompleted(result)).is_err() {
            warn!("Failed to send new-chat completion: receiver dropped");
        }
    });
}

fn spawn_health_probe(backend: Arc<dyn ChatBackend>, tx: mpsc::Sender<Action>) {
    tokio::spawn(async move {
        let healthy = match backend.check_health().await {
            Ok(()) => true,
            Err(e) => {
                warn!("Health check failed: {e}");
                false
            }
        };
        if tx.send(Action::HealthChecked(healthy)).is_err() {
            warn!("Failed to send health result: receiver dropped");
        }
    });
}
