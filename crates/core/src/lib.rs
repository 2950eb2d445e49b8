//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the match-3 rules and the round state machine. It has
//! **no dependencies** on a terminal, a clock, or the filesystem:
//!
//! - **Deterministic**: the same seed produces the same boards and refills
//! - **Injectable**: randomness, audio, scoring, and the high-score record are
//!   traits the host supplies
//! - **Portable**: the same controller drives the terminal front end and the
//!   headless tests
//!
//! # Module Structure
//!
//! - [`board`]: 8x8 grid, match scan, solvability probe, gravity and refill
//! - [`matches`]: fixed-capacity runs of three or more tiles
//! - [`round`]: tick-driven phase machine (swap, clear, fall, cascade, end)
//! - [`session`]: round clock, score counter, and the high-score record
//! - [`scoring`]: match points, score popups, score stores
//! - [`anim`]: per-tile sprite positions for each animated phase
//! - [`audio`]: sound cue sink
//! - [`rng`]: seeded tile source
//!
//! # Rules
//!
//! - A swap is only accepted between orthogonal neighbors and only when it
//!   produces at least one run of three or more equal tiles
//! - Each match scores `tiles * 5 * multiplier`; the multiplier is 1 for the
//!   player's swap and grows by one with every cascade
//! - Cleared cells are filled by gravity, then new tiles drop in from above
//! - A board with no possible move is drained and regenerated
//!
//! # Example
//!
//! ```
//! use tui_match3_core::{Phase, RoundController, ScoreCounter, SilentAudio};
//!
//! let mut round = RoundController::new(12345, SilentAudio, ScoreCounter::new());
//! round.start();
//! for _ in 0..tui_match3_core::types::LONG_ANIMATION_STEPS {
//!     round.update();
//! }
//! assert_eq!(round.phase(), Phase::Steady);
//! assert!(round.board().is_settled());
//! ```
//!
//! # Timing
//!
//! Animations are counted in steps, one per [`RoundController::update`] call;
//! the front end calls it every 16ms.

pub mod anim;
pub mod audio;
pub mod board;
pub mod matches;
pub mod rng;
pub mod round;
pub mod scoring;
pub mod session;

pub use tui_match3_types as types;

// Re-export commonly used types for convenience
pub use anim::TileSprite;
pub use audio::{AudioPlayer, RecordingAudio, SilentAudio};
pub use board::{Board, Solutions};
pub use matches::{Match, MatchSet};
pub use rng::{ScriptedRng, SimpleRng, TileRng};
pub use round::{Phase, RoundController};
pub use scoring::{
    match_points, record_round, FloatingScore, MemoryScoreStore, RoundSummary, ScoreCounter,
    ScoreStore, ScoringSink,
};
pub use session::{GameSession, SessionConfig};
