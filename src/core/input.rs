//! Pure input policies: the character counter with its tier thresholds,
//! and the send-enablement predicate.
//!
//! These are deliberately free functions with no UI types so they can be
//! asserted directly.

/// Soft cap shown as the counter denominator. Typing past it is allowed;
/// the counter just turns to the danger style.
pub const MAX_MESSAGE_CHARS: usize = 1000;
/// Above this the counter switches to the warning style.
pub const WARN_THRESHOLD: usize = 800;
/// Above this the counter switches to the danger style.
pub const DANGER_THRESHOLD: usize = 900;

/// Visual tier for the character counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharTier {
    Normal,
    Warning,
    Danger,
}

/// Character count of the buffer, in Unicode scalar values.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Tier for a given count: danger above 900, warning above 800,
/// normal otherwise. Both thresholds are exclusive on the low side.
pub fn char_tier(count: usize) -> CharTier {
    if count > DANGER_THRESHOLD {
        CharTier::Danger
    } else if count > WARN_THRESHOLD {
        CharTier::Warning
    } else {
        CharTier::Normal
    }
}

/// Counter text as rendered in the input frame.
pub fn format_char_count(count: usize) -> String {
    format!("{count}/{MAX_MESSAGE_CHARS}")
}

/// The send action fires iff there is non-whitespace content and no
/// request is outstanding.
pub fn can_send(text: &str, is_loading: bool) -> bool {
    !text.trim().is_empty() && !is_loading
}
