//! Terminal input module (round-facing).
//!
//! Maps `crossterm` mouse events onto [`crate::types::PointerEvent`] in
//! terminal cell coordinates, and keyboard events onto session [`Command`]s.
//! Nothing here knows about the board layout; the front end hands the pointer
//! events to a round whose geometry matches what it drew.

pub mod map;

pub use tui_match3_types as types;

pub use map::{handle_key_event, handle_mouse_event, should_quit, Command};
