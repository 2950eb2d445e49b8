//! Host services for the game: environment configuration, the on-disk
//! high-score record, and a file logger.
//!
//! Everything that touches the process environment or the filesystem lives
//! here so the core stays deterministic.

pub mod config;
pub mod logging;
pub mod score_store;

pub use tui_match3_core as core;

pub use config::GameConfig;
pub use score_store::FileScoreStore;
