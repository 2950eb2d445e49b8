//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget toolkits and renders into a simple framebuffer that is
//! diffed and flushed to the terminal each frame.
//!
//! - [`fb`]: styled cell framebuffer
//! - [`game_view`]: session to framebuffer, plus the board's pointer geometry
//! - [`renderer`]: terminal modes (raw, alternate screen, mouse capture) and diffing
//! - [`audio`]: terminal bell as the round's audio player

pub mod audio;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_match3_core as core;
pub use tui_match3_types as types;

pub use audio::BellAudio;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_rgb, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
