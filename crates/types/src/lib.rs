//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (board logic, round state machine, terminal rendering).
//!
//! # Board Dimensions
//!
//! The playfield is a square 8x8 grid:
//!
//! - **Columns**: indexed 0-7 (left to right)
//! - **Rows**: indexed 0-7 (top to bottom)
//!
//! # Animation Timing
//!
//! Phases of the round are measured in update ticks, not milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `LONG_ANIMATION_STEPS` | 50 | Board appearing / disappearing / time over |
//! | `SHORT_ANIMATION_STEPS` | 17 | Swap, clear, refill |
//! | `FLOATING_SCORE_LIFETIME` | 80 | Ticks a score popup stays alive |
//!
//! # Pointer Geometry
//!
//! Pointer input arrives in pixels. The default layout places the board at
//! `(241, 41)` with 65 px square cells, which is what [`BoardGeometry::DEFAULT`]
//! describes. Front ends with a different layout supply their own geometry.
//!
//! # Examples
//!
//! ```
//! use tui_match3_types::{Coord, Tile, TileKind, BOARD_SIZE};
//!
//! let red = TileKind::from_letter('r').unwrap();
//! assert_eq!(red, TileKind::Red);
//!
//! // Animation fields never take part in equality.
//! let mut a = Tile::new(TileKind::Red);
//! a.dest_y = 3;
//! assert_eq!(a, Tile::new(TileKind::Red));
//!
//! assert!(Coord::new(2, 2).is_adjacent(Coord::new(2, 3)));
//! assert_eq!(BOARD_SIZE, 8);
//! ```

use std::fmt;

/// Board width and height in cells
pub const BOARD_SIZE: u8 = 8;

/// Total number of cells on the board
pub const BOARD_CELLS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u64 = 16;

/// Ticks for the board-wide animations (appear, disappear, time over)
pub const LONG_ANIMATION_STEPS: u32 = 50;

/// Ticks for the per-move animations (swap, clear, refill)
pub const SHORT_ANIMATION_STEPS: u32 = 17;

/// Points per tile in a match, before the cascade multiplier
pub const POINTS_PER_TILE: u32 = 5;

/// Lifetime of a floating score popup, in ticks
pub const FLOATING_SCORE_LIFETIME: u32 = 80;

/// Default round length in seconds
pub const DEFAULT_ROUND_SECS: u64 = 120;

/// Number of colored tile variants
pub const TILE_COLORS: usize = 7;

/// The tile variants
///
/// `Empty` marks a cleared cell waiting for the next fall computation.
/// The seven colors are interchangeable for matching purposes; only
/// equality between them matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileKind {
    #[default]
    Empty,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    White,
}

impl TileKind {
    /// All colored variants, in a stable order
    pub const COLORS: [TileKind; TILE_COLORS] = [
        TileKind::Red,
        TileKind::Orange,
        TileKind::Yellow,
        TileKind::Green,
        TileKind::Blue,
        TileKind::Purple,
        TileKind::White,
    ];

    /// Colored variant by index (wraps around)
    pub fn color(index: u32) -> Self {
        Self::COLORS[(index as usize) % TILE_COLORS]
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, TileKind::Empty)
    }

    /// Parse from a single letter (case-insensitive), `.` for empty
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_match3_types::TileKind;
    ///
    /// assert_eq!(TileKind::from_letter('G'), Some(TileKind::Green));
    /// assert_eq!(TileKind::from_letter('w'), Some(TileKind::White));
    /// assert_eq!(TileKind::from_letter('.'), Some(TileKind::Empty));
    /// assert_eq!(TileKind::from_letter('?'), None);
    /// ```
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            '.' => Some(TileKind::Empty),
            'R' => Some(TileKind::Red),
            'O' => Some(TileKind::Orange),
            'Y' => Some(TileKind::Yellow),
            'G' => Some(TileKind::Green),
            'B' => Some(TileKind::Blue),
            'P' => Some(TileKind::Purple),
            'W' => Some(TileKind::White),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            TileKind::Empty => '.',
            TileKind::Red => 'R',
            TileKind::Orange => 'O',
            TileKind::Yellow => 'Y',
            TileKind::Green => 'G',
            TileKind::Blue => 'B',
            TileKind::Purple => 'P',
            TileKind::White => 'W',
        }
    }
}

/// A single board cell
///
/// `must_fall`, `orig_y` and `dest_y` only exist to drive the fall animation:
/// the tile is drawn starting at row `orig_y` and travels `dest_y` rows down.
/// They never take part in equality, so match detection only ever sees `kind`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tile {
    pub kind: TileKind,
    pub must_fall: bool,
    pub orig_y: i8,
    pub dest_y: i8,
}

impl Tile {
    pub fn new(kind: TileKind) -> Self {
        Self {
            kind,
            must_fall: false,
            orig_y: 0,
            dest_y: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kind.is_empty()
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for Tile {}

/// Board coordinate: `x` is the column, `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    pub fn in_bounds(&self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    /// True when `other` is one step away horizontally or vertically
    pub fn is_adjacent(&self, other: Coord) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }

    /// Neighbor in the given direction, if it stays on the board
    pub fn step(&self, dir: Direction) -> Option<Coord> {
        let (dx, dy) = dir.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        let c = Coord::new(x, y);
        c.in_bounds().then_some(c)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Swap directions, in the order they are probed when searching for moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Sound cues emitted by the round
///
/// Match sounds are tiered by the cascade multiplier: 1, 2, and 3+.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    Select,
    Match1,
    Match2,
    Match3,
    Fall,
}

impl Sound {
    /// Match sound for the given cascade multiplier
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_match3_types::Sound;
    ///
    /// assert_eq!(Sound::for_multiplier(1), Sound::Match1);
    /// assert_eq!(Sound::for_multiplier(2), Sound::Match2);
    /// assert_eq!(Sound::for_multiplier(7), Sound::Match3);
    /// ```
    pub fn for_multiplier(multiplier: u32) -> Self {
        match multiplier {
            0 | 1 => Sound::Match1,
            2 => Sound::Match2,
            _ => Sound::Match3,
        }
    }
}

/// Pointer input in front-end pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Press { x: i32, y: i32 },
    Release { x: i32, y: i32 },
}

/// Linear mapping between pointer pixels and board cells
///
/// The board covers the half-open rectangle
/// `[origin_x, origin_x + 8 * cell_w) x [origin_y, origin_y + 8 * cell_h)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    pub origin_x: i32,
    pub origin_y: i32,
    pub cell_w: i32,
    pub cell_h: i32,
}

impl BoardGeometry {
    /// Pixel layout of the 800x600 windowed board
    pub const DEFAULT: BoardGeometry = BoardGeometry {
        origin_x: 241,
        origin_y: 41,
        cell_w: 65,
        cell_h: 65,
    };

    pub const fn new(origin_x: i32, origin_y: i32, cell_w: i32, cell_h: i32) -> Self {
        Self {
            origin_x,
            origin_y,
            cell_w,
            cell_h,
        }
    }

    /// Check if a pointer position is over a tile
    pub fn is_over_tile(&self, px: i32, py: i32) -> bool {
        let w = self.cell_w * BOARD_SIZE as i32;
        let h = self.cell_h * BOARD_SIZE as i32;
        px >= self.origin_x
            && px < self.origin_x + w
            && py >= self.origin_y
            && py < self.origin_y + h
    }

    /// Board cell under the pointer, if any
    pub fn to_coord(&self, px: i32, py: i32) -> Option<Coord> {
        if self.cell_w <= 0 || self.cell_h <= 0 || !self.is_over_tile(px, py) {
            return None;
        }
        let x = (px - self.origin_x) / self.cell_w;
        let y = (py - self.origin_y) / self.cell_h;
        Some(Coord::new(x as u8, y as u8))
    }

    /// Top-left pixel of a cell
    pub fn cell_origin(&self, c: Coord) -> (i32, i32) {
        (
            self.origin_x + c.x as i32 * self.cell_w,
            self.origin_y + c.y as i32 * self.cell_h,
        )
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Row-major tile layout, `layout[y][x]`
pub type Layout = [[TileKind; BOARD_SIZE as usize]; BOARD_SIZE as usize];

/// Parse a layout from eight rows of letters (see [`TileKind::from_letter`])
///
/// Returns `None` if a row has the wrong width or an unknown letter.
pub fn parse_layout(rows: [&str; BOARD_SIZE as usize]) -> Option<Layout> {
    let mut layout = [[TileKind::Empty; BOARD_SIZE as usize]; BOARD_SIZE as usize];
    for (y, row) in rows.iter().enumerate() {
        if row.chars().count() != BOARD_SIZE as usize {
            return None;
        }
        for (x, ch) in row.chars().enumerate() {
            layout[y][x] = TileKind::from_letter(ch)?;
        }
    }
    Some(layout)
}
