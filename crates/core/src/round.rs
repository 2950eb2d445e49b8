//! Round module - the animation-driven state machine around the board
//!
//! A [`RoundController`] owns the board and walks it through the phases of a
//! round. Every phase is driven by a step counter advanced once per
//! [`RoundController::update`] call, plus pointer input:
//!
//! ```text
//! NoBoard --start--> BoardAppearing --50--> Steady --press--> TileSelected
//! TileSelected --press/release on a winning neighbor--> TileSwitching
//! TileSelected --any other press--> Steady
//! TileSwitching --17--> TilesClearing --17--> BoardFilling
//! BoardFilling --17--> TilesClearing      (cascade)
//!                   |-> BoardDisappearing (no moves left) --50--> BoardAppearing
//!                   `-> Steady
//! (any) --end_game--> TimeFinished --50--> ShowingSummary
//! ```
//!
//! Each phase has one update handler and one sprite rule; they sit side by side
//! in [`RoundController::update`] and [`RoundController::sprite`].

use crate::anim::{ease_in_quad, ease_out_quad, TileSprite};
use crate::audio::AudioPlayer;
use crate::board::Board;
use crate::matches::MatchSet;
use crate::rng::{SimpleRng, TileRng};
use crate::scoring::{match_points, FloatingScore, ScoringSink};
use crate::types::{
    BoardGeometry, Coord, PointerEvent, Sound, BOARD_SIZE, LONG_ANIMATION_STEPS,
    SHORT_ANIMATION_STEPS,
};

/// Round phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Constructed, not started
    NoBoard,
    /// A fresh board falls into place
    BoardAppearing,
    /// Waiting for the first selection
    Steady,
    /// One tile selected, waiting for its partner
    TileSelected,
    /// Two tiles trade places
    TileSwitching,
    /// Matched tiles fade out
    TilesClearing,
    /// Survivors fall and refills drop in
    BoardFilling,
    /// Dead board drains away before regeneration
    BoardDisappearing,
    /// Round timer expired, board drains away
    TimeFinished,
    /// End-of-round summary is up
    ShowingSummary,
}

impl Phase {
    /// Phases where the round clock should keep running
    pub fn is_playable(&self) -> bool {
        !matches!(
            self,
            Phase::NoBoard | Phase::TimeFinished | Phase::ShowingSummary
        )
    }

    /// Phases that accept pointer input
    pub fn accepts_input(&self) -> bool {
        matches!(self, Phase::Steady | Phase::TileSelected)
    }
}

/// Drives one round: input, swaps, cascades, refills, and the end of the round
///
/// `R` is the board's random source; tests plug in a scripted one to force
/// cascades and dead boards.
#[derive(Debug)]
pub struct RoundController<A, S, R = SimpleRng> {
    phase: Phase,
    board: Board<R>,
    step: u32,
    selected: Option<Coord>,
    swap_pair: Option<(Coord, Coord)>,
    pending: MatchSet,
    multiplier: u32,
    floating: Vec<FloatingScore>,
    geometry: BoardGeometry,
    audio: A,
    scoring: S,
}

impl<A: AudioPlayer, S: ScoringSink> RoundController<A, S, SimpleRng> {
    /// Create a round around a freshly generated board
    pub fn new(seed: u32, audio: A, scoring: S) -> Self {
        Self::with_board(Board::new(seed), audio, scoring)
    }

    /// Throw away the current round and wait for `start` with a new board
    pub fn reset(&mut self, seed: u32) {
        self.board = Board::new(seed);
        self.phase = Phase::NoBoard;
        self.step = 0;
        self.selected = None;
        self.swap_pair = None;
        self.pending = MatchSet::new();
        self.multiplier = 0;
        self.floating.clear();
    }
}

impl<A: AudioPlayer, S: ScoringSink, R: TileRng> RoundController<A, S, R> {
    /// Create a round around an existing board
    pub fn with_board(board: Board<R>, audio: A, scoring: S) -> Self {
        Self {
            phase: Phase::NoBoard,
            board,
            step: 0,
            selected: None,
            swap_pair: None,
            pending: MatchSet::new(),
            multiplier: 0,
            floating: Vec::new(),
            geometry: BoardGeometry::DEFAULT,
            audio,
            scoring,
        }
    }

    /// Start the board-appearing animation
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::NoBoard {
            return false;
        }
        self.enter(Phase::BoardAppearing);
        true
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board<R> {
        &self.board
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn selected(&self) -> Option<Coord> {
        self.selected
    }

    /// Tiles being swapped (set once a swap is confirmed)
    pub fn swap_pair(&self) -> Option<(Coord, Coord)> {
        self.swap_pair
    }

    /// Matches being resolved
    pub fn pending(&self) -> &MatchSet {
        &self.pending
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    pub fn floating_scores(&self) -> &[FloatingScore] {
        &self.floating
    }

    pub fn geometry(&self) -> BoardGeometry {
        self.geometry
    }

    /// Replace the pointer-to-cell mapping (front ends with their own layout)
    pub fn set_geometry(&mut self, geometry: BoardGeometry) {
        self.geometry = geometry;
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    pub fn scoring(&self) -> &S {
        &self.scoring
    }

    pub fn scoring_mut(&mut self) -> &mut S {
        &mut self.scoring
    }

    /// Advance one animation step; performs at most one phase transition
    pub fn update(&mut self) {
        match self.phase {
            Phase::NoBoard | Phase::TileSelected | Phase::ShowingSummary => {}
            Phase::Steady => self.step = 0,
            Phase::BoardAppearing => {
                if self.advance(LONG_ANIMATION_STEPS) {
                    self.enter(Phase::Steady);
                }
            }
            Phase::TileSwitching => {
                if self.advance(SHORT_ANIMATION_STEPS) {
                    self.finish_switch();
                }
            }
            Phase::TilesClearing => {
                if self.advance(SHORT_ANIMATION_STEPS) {
                    self.finish_clearing();
                }
            }
            Phase::BoardFilling => {
                if self.advance(SHORT_ANIMATION_STEPS) {
                    self.finish_filling();
                }
            }
            Phase::BoardDisappearing => {
                if self.advance(LONG_ANIMATION_STEPS) {
                    self.board.generate();
                    self.enter(Phase::BoardAppearing);
                }
            }
            Phase::TimeFinished => {
                if self.advance(LONG_ANIMATION_STEPS) {
                    self.enter(Phase::ShowingSummary);
                }
            }
        }

        for score in &mut self.floating {
            score.tick();
        }
        self.floating.retain(|score| !score.ended());
    }

    /// How a tile should be drawn this tick (`None` for empty or hidden tiles)
    pub fn sprite(&self, c: Coord) -> Option<TileSprite> {
        let tile = self.board.get(c);
        if tile.is_empty() {
            return None;
        }
        let mut sprite = TileSprite::resting(c, tile.kind);

        match self.phase {
            Phase::ShowingSummary => return None,
            Phase::BoardAppearing => {
                sprite.y = ease_out_quad(
                    self.step,
                    tile.orig_y as f32,
                    tile.dest_y as f32,
                    LONG_ANIMATION_STEPS,
                );
            }
            Phase::TileSwitching => {
                if let Some((a, b)) = self.swap_pair {
                    let partner = if c == a {
                        Some(b)
                    } else if c == b {
                        Some(a)
                    } else {
                        None
                    };
                    if let Some(p) = partner {
                        sprite.x = ease_out_quad(
                            self.step,
                            c.x as f32,
                            p.x as f32 - c.x as f32,
                            SHORT_ANIMATION_STEPS,
                        );
                        sprite.y = ease_out_quad(
                            self.step,
                            c.y as f32,
                            p.y as f32 - c.y as f32,
                            SHORT_ANIMATION_STEPS,
                        );
                    }
                }
            }
            Phase::TilesClearing => {
                if self.pending.matched(c) {
                    sprite.alpha = 1.0 - self.step as f32 / SHORT_ANIMATION_STEPS as f32;
                }
            }
            Phase::BoardFilling => {
                if tile.must_fall {
                    sprite.y = ease_out_quad(
                        self.step,
                        tile.orig_y as f32,
                        tile.dest_y as f32,
                        SHORT_ANIMATION_STEPS,
                    );
                }
            }
            Phase::BoardDisappearing | Phase::TimeFinished => {
                sprite.y = ease_in_quad(
                    self.step,
                    tile.orig_y as f32,
                    tile.dest_y as f32,
                    LONG_ANIMATION_STEPS,
                );
            }
            Phase::NoBoard | Phase::Steady | Phase::TileSelected => {}
        }

        Some(sprite)
    }

    /// Sprites for every visible tile, row by row
    pub fn sprites(&self) -> impl Iterator<Item = TileSprite> + '_ {
        (0..BOARD_SIZE)
            .flat_map(|y| (0..BOARD_SIZE).map(move |x| Coord::new(x, y)))
            .filter_map(|c| self.sprite(c))
    }

    /// Round timer expired; idempotent once the round is over
    pub fn end_game(&mut self) -> bool {
        if matches!(self.phase, Phase::TimeFinished | Phase::ShowingSummary) {
            return false;
        }
        self.board.drop_all_tiles();
        self.selected = None;
        self.swap_pair = None;
        self.enter(Phase::TimeFinished);
        true
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Press { x, y } => self.mouse_button_down(x, y),
            PointerEvent::Release { x, y } => self.mouse_button_up(x, y),
        }
    }

    /// Press: select a tile, or confirm/cancel the pending selection
    pub fn mouse_button_down(&mut self, px: i32, py: i32) {
        let Some(c) = self.geometry.to_coord(px, py) else {
            return;
        };

        match self.phase {
            Phase::Steady => {
                self.audio.play_sound(Sound::Select);
                self.selected = Some(c);
                self.enter(Phase::TileSelected);
            }
            Phase::TileSelected => {
                self.audio.play_sound(Sound::Select);
                if self.try_swap_with(c) {
                    self.enter(Phase::TileSwitching);
                } else {
                    self.selected = None;
                    self.enter(Phase::Steady);
                }
            }
            _ => {}
        }
    }

    /// Release: confirms a drag onto a winning neighbor, never cancels
    pub fn mouse_button_up(&mut self, px: i32, py: i32) {
        if self.phase != Phase::TileSelected {
            return;
        }
        let Some(c) = self.geometry.to_coord(px, py) else {
            return;
        };
        if self.selected != Some(c) && self.try_swap_with(c) {
            self.enter(Phase::TileSwitching);
        }
    }

    fn try_swap_with(&mut self, target: Coord) -> bool {
        let Some(first) = self.selected else {
            return false;
        };
        if !first.is_adjacent(target) {
            return false;
        }

        let matches = self.board.matches_after_swap(first, target);
        if matches.is_empty() {
            return false;
        }
        self.pending = matches;
        self.swap_pair = Some((first, target));
        true
    }

    fn finish_switch(&mut self) {
        if let Some((a, b)) = self.swap_pair {
            self.board.swap(a, b);
        }
        self.multiplier += 1;
        self.award_pending();
        self.enter(Phase::TilesClearing);
    }

    fn finish_clearing(&mut self) {
        for c in self.pending.coords() {
            self.board.del(c);
        }
        self.board.calc_fall_movements();
        self.enter(Phase::BoardFilling);
    }

    fn finish_filling(&mut self) {
        self.audio.play_sound(Sound::Fall);
        self.board.end_animations();

        self.pending = self.board.check();
        if !self.pending.is_empty() {
            self.multiplier += 1;
            log::debug!(
                "cascade x{}: {} match(es)",
                self.multiplier,
                self.pending.len()
            );
            self.award_pending();
            self.enter(Phase::TilesClearing);
        } else {
            self.selected = None;
            self.swap_pair = None;
            if self.board.solutions().is_empty() {
                log::debug!("no moves left, replacing board");
                self.board.drop_all_tiles();
                self.enter(Phase::BoardDisappearing);
            } else {
                self.enter(Phase::Steady);
            }
        }
    }

    /// Score every pending match at the current multiplier
    fn award_pending(&mut self) {
        self.audio.play_sound(Sound::for_multiplier(self.multiplier));
        for m in self.pending.iter() {
            let amount = match_points(m.len(), self.multiplier);
            self.scoring.increase_score(amount);
            self.floating.push(FloatingScore::new(amount, m.mid_square()));
        }
    }

    fn advance(&mut self, total: u32) -> bool {
        self.step += 1;
        self.step >= total
    }

    fn enter(&mut self, phase: Phase) {
        log::trace!("{:?} -> {:?}", self.phase, phase);
        if phase == Phase::Steady {
            self.multiplier = 0;
        }
        self.phase = phase;
        self.step = 0;
    }
}
