use tui_match3::core::{GameSession, MemoryScoreStore, Phase, SessionConfig, SilentAudio};
use tui_match3::term::{tile_rgb, GameView, Viewport};
use tui_match3::types::{Coord, LONG_ANIMATION_STEPS, TICK_MS};

type Session = GameSession<SilentAudio, MemoryScoreStore>;

fn steady_session(round_ms: u64) -> Session {
    let config = SessionConfig { seed: 3, round_ms };
    let mut s = GameSession::new(config, SilentAudio, MemoryScoreStore::with_best(320));
    s.start();
    for _ in 0..LONG_ANIMATION_STEPS {
        s.tick(TICK_MS);
    }
    s
}

fn screen_text(fb: &tui_match3::term::FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let s = steady_session(60_000);
    let view = GameView::default();

    // With cell_w=2 and cell_h=1 the board is 16x8, plus border 18x10.
    let fb = view.render(&s, Viewport::new(18, 10));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(17, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 9).unwrap().ch, '└');
    assert_eq!(fb.get(17, 9).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_tiles_two_chars_wide() {
    let s = steady_session(60_000);
    let view = GameView::default();
    let fb = view.render(&s, Viewport::new(18, 10));

    let kind = s.round().board().kind(Coord::new(3, 7));
    let left = fb.get(1 + 3 * 2, 1 + 7).unwrap();
    let right = fb.get(2 + 3 * 2, 1 + 7).unwrap();
    assert_eq!(left.ch, '█');
    assert_eq!(right.ch, '█');
    assert_eq!(left.style.fg, tile_rgb(kind));
}

#[test]
fn term_view_geometry_matches_drawn_board() {
    let view = GameView::default();
    let vp = Viewport::new(60, 20);
    let g = view.board_geometry(vp);
    let mut s = steady_session(60_000);
    s.round_mut().set_geometry(g);

    // Press the cell the view drew at board (5, 1).
    let (x, y) = g.cell_origin(Coord::new(5, 1));
    s.handle_pointer(tui_match3::types::PointerEvent::Press { x: x + 1, y });
    assert_eq!(s.round().selected(), Some(Coord::new(5, 1)));

    let fb = view.render(&s, vp);
    let cell = fb.get(x as u16, y as u16).unwrap();
    assert_eq!(cell.ch, '▓');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let s = steady_session(75_000);
    let view = GameView::default();
    let all = screen_text(&view.render(&s, Viewport::new(60, 20)));

    assert!(all.contains("SCORE"));
    assert!(all.contains("TIME"));
    assert!(all.contains("1:15"), "time left not shown:\n{}", all);
    assert!(all.contains("BEST"));
    assert!(all.contains("320"));
}

#[test]
fn term_view_shows_summary_after_time_up() {
    let mut s = steady_session(60_000);
    s.end_round();
    for _ in 0..LONG_ANIMATION_STEPS {
        s.tick(TICK_MS);
    }
    assert_eq!(s.phase(), Phase::ShowingSummary);

    let all = screen_text(&GameView::default().render(&s, Viewport::new(60, 20)));
    assert!(all.contains("TIME UP"));
    assert!(all.contains("SCORE 0"));
    assert!(all.contains("BEST  320"));
    assert!(!all.contains('█'));
}
