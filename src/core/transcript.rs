//! In-memory message log for the current conversation.
//!
//! Entries live for the process lifetime at most; "clear" and a
//! successful "new chat" empty the log. Nothing here is ever persisted.

use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Tutor,
}

/// A single rendered-or-renderable chat entry. `content` may contain the
/// service's inline markup (`**bold**`, `*italic*`, backtick code).
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub sender: Sender,
    pub content: String,
    pub is_error: bool,
    /// Captured when the entry is appended, shown next to the message.
    pub timestamp: DateTime<Local>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    pub messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, content: String) {
        self.push(Sender::User, content, false);
    }

    pub fn push_tutor(&mut self, content: String) {
        self.push(Sender::Tutor, content, false);
    }

    /// Error entries render in the tutor's slot with error styling.
    pub fn push_error(&mut self, content: String) {
        self.push(Sender::Tutor, content, true);
    }

    fn push(&mut self, sender: Sender, content: String, is_error: bool) {
        self.messages.push(Message {
            sender,
            content,
            is_error,
            timestamp: Local::now(),
        });
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Empty transcript means the welcome placeholder is showing.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_helpers_tag_sender_and_error_flag() {
        let mut t = Transcript::new();
        t.push_user("hi".to_string());
        t.push_tutor("hello!".to_string());
        t.push_error("whoops".to_string());

        assert_eq!(t.len(), 3);
        assert_eq!(t.messages[0].sender, Sender::User);
        assert!(!t.messages[0].is_error);
        assert_eq!(t.messages[1].sender, Sender::Tutor);
        assert!(!t.messages[1].is_error);
        assert_eq!(t.messages[2].sender, Sender::Tutor);
        assert!(t.messages[2].is_error);
    }

    #[test]
    fn clear_empties_the_log() {
        let mut t = Transcript::new();
        t.push_user("one".to_string());
        t.push_tutor("two".to_string());
        assert!(!t.is_empty());

        t.clear();
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
    }

    #[test]
    fn new_transcript_is_empty() {
        assert!(Transcript::new().is_empty());
    }
}
