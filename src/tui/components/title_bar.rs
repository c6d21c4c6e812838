//! # TitleBar Component
//!
//! Top status bar showing application state.
//!
//! ## Responsibilities
//!
//! - Display the app name and the server it is talking to
//! - Display the current status with phase-dependent styling
//! - Show "↓ New" when there is unseen content below the scroll position
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational — it receives all data as props and
//! has no internal state, which keeps it trivial to test:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(
//!     "http://localhost:8000".to_string(),
//!     app.status.clone(),
//!     tui.has_unseen_content,
//! );
//! title_bar.render(frame, title_area);
//! ```
//!
//! ### Status styling
//!
//! The status text carries its phase (`StatusKind`), and the phase alone
//! picks the color: normal stays plain, thinking renders yellow italic,
//! errors render red bold. The bar never interprets the text itself —
//! the core owns the wording, the bar owns the paint.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::state::{Status, StatusKind};
use crate::tui::component::Component;

/// Top status bar component showing server, status, and notifications.
pub struct TitleBar {
    /// Base URL of the tutor service (display only)
    pub server_url: String,
    /// Current status slot from App state
    pub status: Status,
    /// Whether there's content below the current scroll position
    pub has_unseen_content: bool,
}

impl TitleBar {
    pub fn new(server_url: String, status: Status, has_unseen_content: bool) -> Self {
        Self {
            server_url,
            status,
            has_unseen_content,
        }
    }

    fn status_style(kind: StatusKind) -> Style {
        match kind {
            StatusKind::Normal => Style::default().fg(Color::DarkGray),
            StatusKind::Thinking => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
            StatusKind::Error => Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        }
    }
}

impl Component for TitleBar {
    /// Render the title bar as a single line:
    /// `Sage (tutor: <url>) | <status> [| ↓ New]`
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::raw(format!("Sage (tutor: {})", self.server_url)),
            Span::raw(" | "),
            Span::styled(
                self.status.text.clone(),
                Self::status_style(self.status.kind),
            ),
        ];
        if self.has_unseen_content {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("↓ New", Style::default().fg(Color::Cyan)));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
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
    fn test_title_bar_shows_server_and_status() {
        let mut title_bar = TitleBar::new(
            "http://localhost:8000".to_string(),
            Status {
                text: "Ready to help!".to_string(),
                kind: StatusKind::Normal,
            },
            false,
        );
        let text = render_to_string(&mut title_bar);
        assert!(text.contains("Sage"));
        assert!(text.contains("http://localhost:8000"));
        assert!(text.contains("Ready to help!"));
        assert!(!text.contains("↓ New"));
    }

    #[test]
    fn test_title_bar_with_unseen_content() {
        let mut title_bar = TitleBar::new(
            "http://localhost:8000".to_string(),
            Status {
                text: "Thinking...".to_string(),
                kind: StatusKind::Thinking,
            },
            true,
        );
        let text = render_to_string(&mut title_bar);
        assert!(text.contains("Thinking..."));
        assert!(text.contains("↓ New"));
    }

    #[test]
    fn test_status_styles_by_kind() {
        assert_eq!(
            TitleBar::status_style(StatusKind::Error).fg,
            Some(Color::Red)
        );
        assert_eq!(
            TitleBar::status_style(StatusKind::Thinking).fg,
            Some(Color::Yellow)
        );
        assert_eq!(
            TitleBar::status_style(StatusKind::Normal).fg,
            Some(Color::DarkGray)
        );
    }
}
