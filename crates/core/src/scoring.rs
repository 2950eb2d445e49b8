//! Scoring module - match points, score popups, and the high-score record
//!
//! Points for a match are `tiles * 5 * multiplier`, where the multiplier is the
//! cascade depth (1 for the player's own swap, +1 for every chained refill match).
//!
//! The high score lives behind [`ScoreStore`]; the store is expected to swallow
//! its own I/O failures (a missing record reads as 0, a failed write is dropped).

use crate::types::{Coord, FLOATING_SCORE_LIFETIME, POINTS_PER_TILE};

/// Points awarded for a single match
pub fn match_points(tiles: usize, multiplier: u32) -> u32 {
    (tiles as u32)
        .saturating_mul(POINTS_PER_TILE)
        .saturating_mul(multiplier)
}

/// Receives points as matches resolve (once per match per cascade)
pub trait ScoringSink {
    fn increase_score(&mut self, amount: u32);
}

/// Running total for a round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreCounter {
    score: u32,
    awards: u32,
}

impl ScoreCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of `increase_score` calls so far
    pub fn awards(&self) -> u32 {
        self.awards
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl ScoringSink for ScoreCounter {
    fn increase_score(&mut self, amount: u32) {
        self.score = self.score.saturating_add(amount);
        self.awards += 1;
    }
}

/// A score popup anchored on a board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatingScore {
    pub amount: u32,
    pub anchor: Coord,
    remaining: u32,
}

impl FloatingScore {
    pub fn new(amount: u32, anchor: Coord) -> Self {
        Self {
            amount,
            anchor,
            remaining: FLOATING_SCORE_LIFETIME,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Fraction of the lifetime already spent, 0.0..=1.0
    pub fn progress(&self) -> f32 {
        1.0 - self.remaining as f32 / FLOATING_SCORE_LIFETIME as f32
    }

    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn ended(&self) -> bool {
        self.remaining == 0
    }
}

/// Persistent best score
pub trait ScoreStore {
    /// Best score on record, 0 when there is none
    fn load_best(&mut self) -> u32;

    /// Replace the record
    fn save_best(&mut self, score: u32);
}

/// In-memory store (headless runs, tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    best: Option<u32>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: u32) -> Self {
        Self { best: Some(best) }
    }

    pub fn best(&self) -> Option<u32> {
        self.best
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load_best(&mut self) -> u32 {
        self.best.unwrap_or(0)
    }

    fn save_best(&mut self, score: u32) {
        self.best = Some(score);
    }
}

/// End-of-round summary shown once time runs out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub score: u32,
    pub previous_best: u32,
    pub new_record: bool,
}

/// Compare a finished round against the store, saving it if it beats the record
pub fn record_round<S: ScoreStore + ?Sized>(store: &mut S, score: u32) -> RoundSummary {
    let previous_best = store.load_best();
    let new_record = score > previous_best;
    if new_record {
        store.save_best(score);
    }
    RoundSummary {
        score,
        previous_best,
        new_record,
    }
}
