//! Game configuration from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `MATCH3_SEED` | derived from the wall clock |
//! | `MATCH3_ROUND_SECS` | 120 |
//! | `MATCH3_SCORE_FILE` | `$HOME/.tui-match3-score` |
//! | `MATCH3_LOG_PATH` | unset (logging off) |
//! | `MATCH3_BELL` | off |
//!
//! Values that fail to parse fall back to the default.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::types::DEFAULT_ROUND_SECS;
use crate::core::SessionConfig;
use crate::score_store::FileScoreStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u32,
    pub round_secs: u64,
    pub score_file: PathBuf,
    pub log_path: Option<PathBuf>,
    pub bell: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            round_secs: DEFAULT_ROUND_SECS,
            score_file: FileScoreStore::default_path(),
            log_path: None,
            bell: false,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup (the process environment in
    /// production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("MATCH3_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);
        let round_secs = lookup("MATCH3_ROUND_SECS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&secs: &u64| secs > 0)
            .unwrap_or(defaults.round_secs);
        let score_file = lookup("MATCH3_SCORE_FILE")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.score_file);
        let log_path = lookup("MATCH3_LOG_PATH")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        let bell = lookup("MATCH3_BELL")
            .map(|s| parse_flag(&s))
            .unwrap_or(defaults.bell);

        Self {
            seed,
            round_secs,
            score_file,
            log_path,
            bell,
        }
    }

    pub fn session(&self) -> SessionConfig {
        SessionConfig {
            seed: self.seed,
            round_ms: self.round_secs.saturating_mul(1000),
        }
    }
}

fn parse_flag(s: &str) -> bool {
    matches!(
        s.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}
