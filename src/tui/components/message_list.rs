//! # MessageList Component
//!
//! Scrollable view of the conversation transcript.
//!
//! ## Responsibilities
//!
//! - Display the transcript messages in order
//! - Stick to the bottom while new content arrives; detach when the user
//!   scrolls up, re-attach when they scroll back to the end
//! - Show an animated thinking indicator while a request is in flight
//!
//! ## Architecture
//!
//! `MessageList` is a transient component (created each frame) that wraps
//! `&mut MessageListState` (persistent scroll state) and the transcript
//! (props). Since `Component::render` takes `&mut self`, scroll state can
//! be mutated during the render pass, aligning with Ratatui's
//! `StatefulWidget` pattern.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::transcript::Transcript;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::message::MessageView;
use crate::tui::event::TuiEvent;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
/// Height reserved for the thinking indicator line while loading.
const SPINNER_HEIGHT: u16 = 1;

/// Scroll state for the message list. Must be persisted in the parent
/// TuiState across frames.
pub struct MessageListState {
    pub scroll_state: ScrollViewState,
    /// When true, auto-scroll to bottom on new content
    pub stick_to_bottom: bool,
    /// Last known content height (for clamping between frames)
    content_height: u16,
    /// Last known viewport height
    viewport_height: u16,
    /// True when content extends below the current scroll position
    pub has_unseen_content: bool,
}

impl Default for MessageListState {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            stick_to_bottom: true, // Start attached to bottom
            content_height: 0,
            viewport_height: 0,
            has_unseen_content: false,
        }
    }

    fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    fn clamp_scroll(&mut self) {
        let max_y = self.max_scroll();
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Re-engage auto-scroll when the user has scrolled back to the end.
    fn repin_if_at_bottom(&mut self) {
        if self.scroll_state.offset().y >= self.max_scroll() {
            self.stick_to_bottom = true;
        }
    }
}

impl EventHandler for MessageListState {
    type Event = (); // scrolling is handled internally

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
            }
            _ => {}
        }
        None
    }
}

/// Scrollable transcript view. Created fresh each frame with references
/// to state and data.
pub struct MessageList<'a> {
    pub state: &'a mut MessageListState,
    pub transcript: &'a Transcript,
    pub is_loading: bool,
    pub spinner_frame: usize,
}

impl<'a> MessageList<'a> {
    pub fn new(
        state: &'a mut MessageListState,
        transcript: &'a Transcript,
        is_loading: bool,
        spinner_frame: usize,
    ) -> Self {
        Self {
            state,
            transcript,
            is_loading,
            spinner_frame,
        }
    }
}

impl<'a> Component for MessageList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar

        let heights: Vec<u16> = self
            .transcript
            .messages
            .iter()
            .map(|m| MessageView::calculate_height(m, content_width))
            .collect();
        let messages_height: u16 = heights.iter().sum();
        let canvas_height = if self.is_loading {
            messages_height + SPINNER_HEIGHT
        } else {
            messages_height
        };

        self.state.content_height = canvas_height;
        self.state.viewport_height = area.height;
        if !self.state.stick_to_bottom {
            self.state.clamp_scroll();
        }

        let mut scroll_view = ScrollView::new(Size::new(content_width, canvas_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (message, height) in self.transcript.messages.iter().zip(&heights) {
            let rect = Rect::new(0, y_offset, content_width, *height);
            scroll_view.render_widget(MessageView::new(message), rect);
            y_offset += height;
        }

        if self.is_loading {
            let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            let line = Line::from(vec![
                Span::styled(format!(" {spinner} "), Style::default().fg(Color::Yellow)),
                Span::styled(
                    "Thinking...",
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                ),
            ]);
            let rect = Rect::new(0, y_offset, content_width, SPINNER_HEIGHT);
            scroll_view.render_widget(line, rect);
        }

        if self.state.stick_to_bottom {
            self.state.scroll_state.scroll_to_bottom();
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);

        // Unseen-content indicator for the title bar
        let offset = self.state.scroll_state.offset().y;
        self.state.has_unseen_content =
            canvas_height > area.height && offset < self.state.max_scroll();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn transcript_with(count: usize) -> Transcript {
        let mut t = Transcript::new();
        for i in 0..count {
            t.push_user(format!("message number {i}"));
        }
        t
    }

    fn draw(state: &mut MessageListState, transcript: &Transcript, loading: bool) -> String {
        let backend = TestBackend::new(40, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let mut list = MessageList::new(state, transcript, loading, 0);
                list.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn renders_messages() {
        let transcript = transcript_with(2);
        let mut state = MessageListState::new();
        let text = draw(&mut state, &transcript, false);
        assert!(text.contains("message number 0"));
        assert!(text.contains("message number 1"));
    }

    #[test]
    fn shows_thinking_indicator_while_loading() {
        let transcript = transcript_with(1);
        let mut state = MessageListState::new();
        let text = draw(&mut state, &transcript, true);
        assert!(text.contains("Thinking..."));
    }

    #[test]
    fn no_indicator_when_idle() {
        let transcript = transcript_with(1);
        let mut state = MessageListState::new();
        let text = draw(&mut state, &transcript, false);
        assert!(!text.contains("Thinking..."));
    }

    #[test]
    fn scroll_up_detaches_scroll_down_repins() {
        let mut state = MessageListState::new();
        state.content_height = 50;
        state.viewport_height = 10;
        state
            .scroll_state
            .set_offset(Position { x: 0, y: 40 });

        state.handle_event(&TuiEvent::ScrollUp);
        assert!(!state.stick_to_bottom);

        // Scroll back down to the end: should re-attach
        for _ in 0..2 {
            state.handle_event(&TuiEvent::ScrollDown);
        }
        assert!(state.stick_to_bottom);
    }

    #[test]
    fn sticks_to_bottom_with_tall_content() {
        // 10 messages at >=3 rows each never fit a 12-row viewport
        let transcript = transcript_with(10);
        let mut state = MessageListState::new();
        let text = draw(&mut state, &transcript, false);
        // The newest message must be visible; the oldest scrolled away.
        assert!(text.contains("message number 9"));
        assert!(!text.contains("message number 0"));
        assert!(!state.has_unseen_content);
    }
}
