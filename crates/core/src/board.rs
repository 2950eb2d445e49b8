//! Board module - manages the game grid
//!
//! The board is an 8x8 grid where each cell holds a [`Tile`] (a color, or empty).
//! Uses a flat array for better cache locality and zero-allocation scans.
//! Coordinates: (x, y) where x ranges 0..7 (left to right), y ranges 0..7 (top to bottom)
//!
//! Coordinates passed to board operations must be on the board; an out-of-range
//! coordinate is a caller bug and panics.

use std::fmt;

use crate::matches::{Match, MatchSet};
use crate::rng::{SimpleRng, TileRng};
use crate::types::{Coord, Direction, Layout, Tile, TileKind, BOARD_CELLS, BOARD_SIZE};

type Cells = [Tile; BOARD_CELLS];

/// Outcome of a solvability probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solutions {
    /// The board already contains a match; no probing was done
    AlreadyMatched,
    /// Coordinates that take part in at least one winning swap, in probe order
    ///
    /// Each coordinate appears once, however many of its swaps win.
    Moves(Vec<Coord>),
}

impl Solutions {
    /// True when no swap on the board can produce a match
    pub fn is_empty(&self) -> bool {
        match self {
            Solutions::AlreadyMatched => false,
            Solutions::Moves(moves) => moves.is_empty(),
        }
    }

    pub fn moves(&self) -> &[Coord] {
        match self {
            Solutions::AlreadyMatched => &[],
            Solutions::Moves(moves) => moves,
        }
    }
}

/// The game board - 8x8 tiles plus the random source used to fill them
#[derive(Debug, Clone)]
pub struct Board<R = SimpleRng> {
    /// Flat array of tiles, row-major order (y * SIZE + x)
    cells: Cells,
    rng: R,
}

impl Board<SimpleRng> {
    /// Create a freshly generated board from a seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: TileRng> Board<R> {
    /// Create a freshly generated board drawing from `rng`
    pub fn with_rng(rng: R) -> Self {
        let mut board = Self {
            cells: [Tile::default(); BOARD_CELLS],
            rng,
        };
        board.generate();
        board
    }

    /// Create a board with a fixed layout (no animation pending)
    ///
    /// The layout is taken as-is; it does not have to be settled.
    pub fn from_layout(layout: &Layout, rng: R) -> Self {
        let mut board = Self {
            cells: [Tile::default(); BOARD_CELLS],
            rng,
        };
        for (y, row) in layout.iter().enumerate() {
            for (x, &kind) in row.iter().enumerate() {
                board.cells[y * BOARD_SIZE as usize + x] = Tile::new(kind);
            }
        }
        board.end_animations();
        board
    }

    pub fn get(&self, c: Coord) -> Tile {
        self.cells[index(c)]
    }

    pub fn kind(&self, c: Coord) -> TileKind {
        self.get(c).kind
    }

    /// Overwrite a tile's kind, keeping its animation fields
    pub fn set(&mut self, c: Coord, kind: TileKind) {
        self.cells[index(c)].kind = kind;
    }

    /// Get a reference to the internal tiles array (row-major)
    pub fn tiles(&self) -> &[Tile] {
        &self.cells
    }

    /// Snapshot of the tile kinds, `layout[y][x]`
    pub fn layout(&self) -> Layout {
        let mut layout = [[TileKind::Empty; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        for (i, tile) in self.cells.iter().enumerate() {
            layout[i / BOARD_SIZE as usize][i % BOARD_SIZE as usize] = tile.kind;
        }
        layout
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Fill the board with random tiles until it has no match and at least one move
    ///
    /// Every tile starts above the board and falls into its own row.
    pub fn generate(&mut self) {
        let mut attempts: u32 = 0;
        loop {
            attempts += 1;
            for y in 0..BOARD_SIZE {
                for x in 0..BOARD_SIZE {
                    let kind = self.rng.next_color();
                    let orig_y = self.rng.next_range(8) as i8 - 9;
                    self.cells[index(Coord::new(x, y))] = Tile {
                        kind,
                        must_fall: true,
                        orig_y,
                        dest_y: y as i8 - orig_y,
                    };
                }
            }

            // `solutions` reports a pre-existing match without probing swaps.
            match self.solutions() {
                Solutions::Moves(moves) if !moves.is_empty() => break,
                _ => {}
            }
        }
        log::debug!("generated board after {} attempt(s)", attempts);
    }

    /// Exchange two tiles, animation state included
    pub fn swap(&mut self, a: Coord, b: Coord) {
        swap_cells(&mut self.cells, a, b);
    }

    /// Clear a tile
    pub fn del(&mut self, c: Coord) {
        self.cells[index(c)].kind = TileKind::Empty;
    }

    /// Scan rows, then columns, for runs of three or more
    pub fn check(&self) -> MatchSet {
        scan_matches(&self.cells)
    }

    /// Matches the board would have after swapping `a` and `b` (board unchanged)
    pub fn matches_after_swap(&self, a: Coord, b: Coord) -> MatchSet {
        let mut scratch = self.cells;
        swap_cells(&mut scratch, a, b);
        scan_matches(&scratch)
    }

    /// Find every cell that has a winning adjacent swap
    ///
    /// Cells are probed column by column; each cell tries up, down, left and
    /// right and is listed once if any of them wins.
    pub fn solutions(&self) -> Solutions {
        if !self.check().is_empty() {
            return Solutions::AlreadyMatched;
        }

        let mut scratch = self.cells;
        let mut moves = Vec::new();
        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                let c = Coord::new(x, y);
                let wins = Direction::ALL
                    .iter()
                    .filter_map(|&dir| c.step(dir))
                    .any(|n| swap_wins(&mut scratch, c, n));
                if wins {
                    moves.push(c);
                }
            }
        }
        Solutions::Moves(moves)
    }

    /// Settled means no pending match and at least one available move
    pub fn is_settled(&self) -> bool {
        matches!(self.solutions(), Solutions::Moves(ref m) if !m.is_empty())
    }

    /// Let tiles fall into empty cells and refill each column from the top
    ///
    /// Falling tiles keep the row they started from in `orig_y` and the
    /// distance travelled in `dest_y`; refills start above the board.
    pub fn calc_fall_movements(&mut self) {
        self.end_animations();

        for x in 0..BOARD_SIZE {
            // Every tile above an empty cell falls one more row.
            for y in (0..BOARD_SIZE).rev() {
                if self.get(Coord::new(x, y)).is_empty() {
                    for k in 0..y {
                        let tile = &mut self.cells[index(Coord::new(x, k))];
                        tile.must_fall = true;
                        tile.dest_y += 1;
                    }
                }
            }

            // Bottom-up so each target cell has already been vacated.
            for y in (0..BOARD_SIZE).rev() {
                let from = Coord::new(x, y);
                let tile = self.get(from);
                if tile.must_fall && !tile.is_empty() {
                    let to = Coord::new(x, y + tile.dest_y as u8);
                    self.cells[index(to)] = tile;
                    self.cells[index(from)] = Tile {
                        orig_y: y as i8,
                        ..Tile::new(TileKind::Empty)
                    };
                }
            }

            let empty_spaces = (0..BOARD_SIZE)
                .take_while(|&y| self.get(Coord::new(x, y)).is_empty())
                .count() as i8;

            for y in 0..BOARD_SIZE {
                let c = Coord::new(x, y);
                if self.get(c).is_empty() {
                    let kind = self.rng.next_color();
                    self.cells[index(c)] = Tile {
                        kind,
                        must_fall: true,
                        orig_y: y as i8 - empty_spaces,
                        dest_y: empty_spaces,
                    };
                }
            }
        }
    }

    /// Send every tile falling off the bottom of the board
    pub fn drop_all_tiles(&mut self) {
        for (i, tile) in self.cells.iter_mut().enumerate() {
            tile.must_fall = true;
            tile.orig_y = (i / BOARD_SIZE as usize) as i8;
            tile.dest_y = 9 + self.rng.next_range(8) as i8;
        }
    }

    /// Reset animation state: nothing falling, every tile resting in its row
    pub fn end_animations(&mut self) {
        for (i, tile) in self.cells.iter_mut().enumerate() {
            tile.must_fall = false;
            tile.orig_y = (i / BOARD_SIZE as usize) as i8;
            tile.dest_y = 0;
        }
    }
}

impl<R> fmt::Display for Board<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(BOARD_SIZE as usize) {
            for (x, tile) in row.iter().enumerate() {
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", tile.kind.letter())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Calculate flat index from a coordinate
#[inline(always)]
fn index(c: Coord) -> usize {
    assert!(c.in_bounds(), "coordinate {} is outside the board", c);
    (c.y as usize) * (BOARD_SIZE as usize) + (c.x as usize)
}

fn swap_cells(cells: &mut Cells, a: Coord, b: Coord) {
    let ia = index(a);
    let ib = index(b);
    cells.swap(ia, ib);
}

fn swap_wins(cells: &mut Cells, a: Coord, b: Coord) -> bool {
    swap_cells(cells, a, b);
    let hit = !scan_matches(cells).is_empty();
    swap_cells(cells, a, b);
    hit
}

fn scan_matches(cells: &Cells) -> MatchSet {
    let mut matches = MatchSet::new();
    for y in 0..BOARD_SIZE {
        scan_line(cells, &mut matches, |i| Coord::new(i, y));
    }
    for x in 0..BOARD_SIZE {
        scan_line(cells, &mut matches, |i| Coord::new(x, i));
    }
    matches
}

/// Emit every maximal run of 3+ along one line; scanning resumes after a run
fn scan_line(cells: &Cells, out: &mut MatchSet, at: impl Fn(u8) -> Coord) {
    let kind_at = |i: u8| cells[index(at(i))].kind;

    let mut start = 0;
    while start + 2 < BOARD_SIZE {
        let kind = kind_at(start);
        let mut end = start + 1;
        if !kind.is_empty() {
            while end < BOARD_SIZE && kind_at(end) == kind {
                end += 1;
            }
        }

        if end - start >= 3 {
            let mut run = Match::new();
            for i in start..end {
                run.push(at(i));
            }
            out.push(run);
        }
        start = end;
    }
}
