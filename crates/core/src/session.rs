//! Session module - a timed round plus its score and high-score record
//!
//! The session owns the round clock. Front ends feed it wall-clock time with
//! [`GameSession::tick`]; one call advances the round by exactly one animation
//! step, so the loop is expected to call it every [`TICK_MS`] milliseconds.

use crate::audio::AudioPlayer;
use crate::rng::{SimpleRng, TileRng};
use crate::round::{Phase, RoundController};
use crate::scoring::{record_round, RoundSummary, ScoreCounter, ScoreStore};
use crate::types::{PointerEvent, DEFAULT_ROUND_SECS, TICK_MS};

/// Session parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Seed for the first board; later boards draw seeds from it
    pub seed: u32,
    /// Round length in milliseconds
    pub round_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            round_ms: DEFAULT_ROUND_SECS * 1000,
        }
    }
}

/// One player's game: consecutive timed rounds sharing a score store
#[derive(Debug)]
pub struct GameSession<A, St> {
    round: RoundController<A, ScoreCounter>,
    store: St,
    seeds: SimpleRng,
    round_ms: u64,
    remaining_ms: u64,
    best: u32,
    summary: Option<RoundSummary>,
}

impl<A: AudioPlayer, St: ScoreStore> GameSession<A, St> {
    pub fn new(config: SessionConfig, audio: A, mut store: St) -> Self {
        let best = store.load_best();
        let mut seeds = SimpleRng::new(config.seed);
        let first = seeds.next_u32();
        Self {
            round: RoundController::new(first, audio, ScoreCounter::new()),
            store,
            seeds,
            round_ms: config.round_ms,
            remaining_ms: config.round_ms,
            best,
            summary: None,
        }
    }

    /// Start the first round
    pub fn start(&mut self) {
        if self.round.start() {
            log::info!("round started ({} ms)", self.round_ms);
        }
    }

    /// Advance the clock by `elapsed_ms` and the round by one step
    pub fn tick(&mut self, elapsed_ms: u64) {
        if self.round.phase().is_playable() {
            self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
            if self.remaining_ms == 0 {
                self.end_round();
            }
        }
        self.round.update();
    }

    /// Stop the round now and record its score
    pub fn end_round(&mut self) {
        if !self.round.end_game() {
            return;
        }
        self.remaining_ms = 0;
        let score = self.score();
        let summary = record_round(&mut self.store, score);
        self.best = summary.previous_best.max(summary.score);
        log::info!(
            "round over: score {} (best {}{})",
            summary.score,
            self.best,
            if summary.new_record { ", new record" } else { "" }
        );
        self.summary = Some(summary);
    }

    /// Throw the current round away and start a fresh one
    pub fn restart(&mut self) {
        let seed = self.seeds.next_u32();
        self.round.reset(seed);
        self.round.scoring_mut().reset();
        self.remaining_ms = self.round_ms;
        self.summary = None;
        self.start();
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        self.round.handle_pointer(event);
    }

    pub fn round(&self) -> &RoundController<A, ScoreCounter> {
        &self.round
    }

    pub fn round_mut(&mut self) -> &mut RoundController<A, ScoreCounter> {
        &mut self.round
    }

    pub fn phase(&self) -> Phase {
        self.round.phase()
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    pub fn score(&self) -> u32 {
        self.round.scoring().score()
    }

    /// Best score on record, as of the last finished round
    pub fn best(&self) -> u32 {
        self.best
    }

    /// Set once the round has ended
    pub fn summary(&self) -> Option<RoundSummary> {
        self.summary
    }

    pub fn store(&self) -> &St {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut St {
        &mut self.store
    }
}

/// Number of ticks in a round of `round_ms`
pub fn ticks_for(round_ms: u64) -> u64 {
    round_ms.div_ceil(TICK_MS)
}
