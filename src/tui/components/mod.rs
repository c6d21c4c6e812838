//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! Two patterns live here, mirroring React's component model:
//!
//! - **Stateless (props-based)**: `TitleBar`, `MessageView`, `Landing` —
//!   created fresh each frame from current data.
//! - **Stateful (event-driven)**: `InputBox` (buffer + cursor),
//!   `MessageListState` (scroll position) — persisted in `TuiState`
//!   across frames.
//!
//! Each component file contains its state types, event types, rendering
//! logic, and tests, so one file tells the whole story of one component.

pub mod input_box;
pub mod landing;
pub mod message;
pub mod message_list;
pub mod title_bar;

pub use input_box::{InputBox, InputEvent};
pub use landing::Landing;
pub use message::MessageView;
pub use message_list::{MessageList, MessageListState};
pub use title_bar::TitleBar;
