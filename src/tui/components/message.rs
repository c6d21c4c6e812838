use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};

use crate::core::transcript::{Message, Sender};
use crate::tui::markup;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// Renders a single chat message as a bordered block: sender role in the
/// top title, timestamp in the bottom-right, markup-styled content inside.
/// Error entries override the sender styling with red.
///
/// `MessageView` is a transient widget, created fresh each frame by the
/// `MessageList`.
#[derive(Clone, Copy)]
pub struct MessageView<'a> {
    pub message: &'a Message,
}

impl<'a> MessageView<'a> {
    pub fn new(message: &'a Message) -> Self {
        Self { message }
    }

    fn role(&self) -> &'static str {
        match self.message.sender {
            Sender::User => "you",
            Sender::Tutor => "tutor",
        }
    }

    fn content_style(&self) -> Style {
        if self.message.is_error {
            return Style::default().fg(Color::Red);
        }
        match self.message.sender {
            Sender::User => Style::default().fg(Color::Green),
            Sender::Tutor => Style::default().fg(Color::Blue),
        }
    }

    fn paragraph(&self) -> Paragraph<'static> {
        let style = self.content_style();
        let border_style = style.add_modifier(Modifier::DIM);
        let stamp = self.message.timestamp.format("%H:%M:%S").to_string();

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .title(self.role())
            .title_bottom(
                Line::styled(stamp, Style::default().fg(Color::DarkGray)).right_aligned(),
            )
            .border_style(border_style)
            .title_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        Paragraph::new(markup::render(self.message.content.trim(), style))
            .block(block)
            .wrap(Wrap { trim: false })
    }

    /// Predict the rendered height for a given width without drawing.
    ///
    /// `Paragraph::line_count` accounts for the block's borders, so this
    /// is exact for the widget produced by [`Self::render`] — which lets
    /// the message list size its scroll canvas up front.
    pub fn calculate_height(message: &Message, width: u16) -> u16 {
        if width == 0 {
            return VERTICAL_OVERHEAD;
        }
        let view = MessageView { message };
        (view.paragraph().line_count(width) as u16).max(VERTICAL_OVERHEAD)
    }
}

impl<'a> Widget for MessageView<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        self.paragraph().render(area, buf);
    }
}
