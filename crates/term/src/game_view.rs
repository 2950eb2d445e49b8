//! GameView: maps a `core::GameSession` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The board is drawn at a fixed cell size inside a one-cell border, centered
//! in the viewport. [`GameView::board_geometry`] reports where that board
//! lands so pointer events in terminal coordinates map back to tiles.

use crate::core::{AudioPlayer, GameSession, Phase, ScoreStore, TileSprite};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{BoardGeometry, TileKind, BOARD_SIZE};

const BOARD_BG: Rgb = Rgb::new(24, 24, 34);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the board frame sits inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl Frame {
    fn inner_x(&self) -> u16 {
        self.x + 1
    }

    fn inner_y(&self) -> u16 {
        self.y + 1
    }
}

/// A lightweight terminal renderer for the match-3 board.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    fn frame(&self, viewport: Viewport) -> Frame {
        let w = BOARD_SIZE as u16 * self.cell_w + 2;
        let h = BOARD_SIZE as u16 * self.cell_h + 2;
        Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        }
    }

    /// Pointer geometry of the board as drawn in `viewport`, in terminal cells.
    pub fn board_geometry(&self, viewport: Viewport) -> BoardGeometry {
        let frame = self.frame(viewport);
        BoardGeometry::new(
            frame.inner_x() as i32,
            frame.inner_y() as i32,
            self.cell_w as i32,
            self.cell_h as i32,
        )
    }

    /// Render the session into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into<A, St>(
        &self,
        session: &GameSession<A, St>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) where
        A: AudioPlayer,
        St: ScoreStore,
    {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let frame = self.frame(viewport);
        let round = session.round();

        fb.fill_rect(
            frame.inner_x(),
            frame.inner_y(),
            frame.w - 2,
            frame.h - 2,
            ' ',
            CellStyle::new(Rgb::new(60, 60, 70), BOARD_BG),
        );
        draw_border(fb, frame, CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG));

        let selected = round.selected();
        for sprite in round.sprites() {
            self.draw_tile(fb, frame, &sprite, selected == Some(sprite.coord));
        }

        let popup = CellStyle::new(Rgb::new(255, 255, 255), BOARD_BG).bold();
        for score in round.floating_scores() {
            let rise = score.progress() * 1.5;
            let row = (score.anchor.y as f32 + 0.5 - rise) * self.cell_h as f32;
            if row < 0.0 {
                continue;
            }
            let y = frame.inner_y() + row as u16;
            let cx = frame.inner_x() + score.anchor.x as u16 * self.cell_w + self.cell_w / 2;
            let mut text = [0u8; 12];
            fb.put_str_centered(cx, y, plus_amount(score.amount, &mut text), popup);
        }

        self.draw_side_panel(fb, session, viewport, frame);

        if round.phase() == Phase::ShowingSummary {
            if let Some(summary) = session.summary() {
                let style = CellStyle::new(Rgb::new(255, 255, 255), BOARD_BG).bold();
                let value = CellStyle::new(Rgb::new(220, 220, 220), BOARD_BG);
                let cx = frame.x + frame.w / 2;
                let mid = frame.y + frame.h / 2;

                fb.put_str_centered(cx, mid.saturating_sub(2), "TIME UP", style);
                let x = fb.put_str(cx.saturating_sub(5), mid, "SCORE ", value);
                fb.put_u32(x, mid, summary.score, value);
                if summary.new_record {
                    fb.put_str_centered(cx, mid + 1, "NEW RECORD!", style);
                } else {
                    let x = fb.put_str(cx.saturating_sub(5), mid + 1, "BEST  ", value);
                    fb.put_u32(x, mid + 1, summary.previous_best, value);
                }
                fb.put_str_centered(cx, mid + 3, "r: restart", value.dim());
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<A, St>(&self, session: &GameSession<A, St>, viewport: Viewport) -> FrameBuffer
    where
        A: AudioPlayer,
        St: ScoreStore,
    {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, frame: Frame, sprite: &TileSprite, selected: bool) {
        let row = (sprite.y * self.cell_h as f32).round();
        let col = (sprite.x * self.cell_w as f32).round();
        let rows = (BOARD_SIZE as u16 * self.cell_h) as f32;
        let cols = (BOARD_SIZE as u16 * self.cell_w) as f32;
        // Tiles above or below the board are hidden by the frame.
        if row < 0.0 || col < 0.0 || row + self.cell_h as f32 > rows || col >= cols {
            return;
        }

        let fg = tile_rgb(sprite.kind).blend(BOARD_BG, sprite.alpha);
        let (ch, style) = if selected {
            ('▓', CellStyle::new(fg, Rgb::new(230, 230, 230)).bold())
        } else {
            ('█', CellStyle::new(fg, BOARD_BG))
        };
        fb.fill_rect(
            frame.inner_x() + col as u16,
            frame.inner_y() + row as u16,
            self.cell_w,
            self.cell_h,
            ch,
            style,
        );
    }

    fn draw_side_panel<A, St>(
        &self,
        fb: &mut FrameBuffer,
        session: &GameSession<A, St>,
        viewport: Viewport,
        frame: Frame,
    ) where
        A: AudioPlayer,
        St: ScoreStore,
    {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, session.score(), value);
        y += 3;

        fb.put_str(panel_x, y, "TIME", label);
        let secs = session.remaining_ms().div_ceil(1000);
        let x = fb.put_u32(panel_x, y + 1, (secs / 60) as u32, value);
        let x = fb.put_str(x, y + 1, ":", value);
        if secs % 60 < 10 {
            fb.put_char(x, y + 1, '0', value);
            fb.put_u32(x + 1, y + 1, (secs % 60) as u32, value);
        } else {
            fb.put_u32(x, y + 1, (secs % 60) as u32, value);
        }
        y += 3;

        fb.put_str(panel_x, y, "BEST", label);
        fb.put_u32(panel_x, y + 1, session.best(), value);
        y += 3;

        let multiplier = session.round().multiplier();
        if multiplier > 1 {
            let combo = CellStyle::new(Rgb::new(255, 200, 80), PANEL_BG).bold();
            let x = fb.put_str(panel_x, y, "x", combo);
            fb.put_u32(x, y, multiplier, combo);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);
    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Terminal color for a tile kind.
pub fn tile_rgb(kind: TileKind) -> Rgb {
    match kind {
        TileKind::Empty => BOARD_BG,
        TileKind::Red => Rgb::new(220, 60, 60),
        TileKind::Orange => Rgb::new(255, 150, 30),
        TileKind::Yellow => Rgb::new(240, 220, 70),
        TileKind::Green => Rgb::new(90, 210, 100),
        TileKind::Blue => Rgb::new(70, 120, 230),
        TileKind::Purple => Rgb::new(180, 90, 220),
        TileKind::White => Rgb::new(235, 235, 235),
    }
}

/// Format `+amount` into `buf` without allocating.
fn plus_amount(amount: u32, buf: &mut [u8; 12]) -> &str {
    let mut n = amount;
    let mut i = buf.len();
    loop {
        i -= 1;
        buf[i] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    i -= 1;
    buf[i] = b'+';
    std::str::from_utf8(&buf[i..]).unwrap_or("+")
}
