//! # Landing Component
//!
//! The welcome placeholder, shown only while the transcript is empty.
//! Hidden by the first sent message; brought back by clearing the chat.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct Landing;

impl Component for Landing {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "Sage",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("v{}", env!("CARGO_PKG_VERSION")),
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
            Line::from("Your study buddy from Class 1 to Class 12."),
            Line::from("Ask about math, science, English, or history."),
            Line::default(),
            Line::from(Span::styled(
                "Try: \"What is 15 x 8?\" · \"Explain photosynthesis\" · \"What is a noun?\"",
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
            Line::from(Span::styled(
                "Enter send · Ctrl+J newline · Ctrl+N new chat · Ctrl+L clear · Ctrl+C quit",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            )),
        ];

        let text_height = lines.len() as u16;
        let [centered] = Layout::vertical([Constraint::Length(text_height)])
            .flex(Flex::Center)
            .areas(area);

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, centered);
    }
}
