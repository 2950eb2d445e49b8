//! Round controller tests - phases, input handling, scoring and sounds

use tui_match3::core::{
    Board, Phase, RecordingAudio, RoundController, ScoreCounter, ScriptedRng, SilentAudio,
    SimpleRng, TileRng,
};
use tui_match3::types::{
    parse_layout, BoardGeometry, Coord, PointerEvent, Sound, TileKind, LONG_ANIMATION_STEPS,
    SHORT_ANIMATION_STEPS,
};

type Round<R = SimpleRng> = RoundController<RecordingAudio, ScoreCounter, R>;

/// Stripes with one winning swap: (2, 2) <-> (2, 3) completes `RRR` in row 2.
const ONE_MOVE: [&str; 8] = [
    "ROYGBPWR", "GBPWROYG", "RROYGBPW", "YGRPWROY", "PWROYGBP", "OYGBPWRO", "BPWROYGB",
    "ROYGBPWR",
];

fn round() -> Round {
    let layout = parse_layout(ONE_MOVE).unwrap();
    let board = Board::from_layout(&layout, SimpleRng::new(21));
    RoundController::with_board(board, RecordingAudio::new(), ScoreCounter::new())
}

fn steady() -> Round {
    let mut r = round();
    r.start();
    updates(&mut r, LONG_ANIMATION_STEPS);
    assert_eq!(r.phase(), Phase::Steady);
    r
}

/// `ONE_MOVE` in Steady, refilled from a fixed list of colors
fn scripted(colors: Vec<TileKind>) -> Round<ScriptedRng> {
    let layout = parse_layout(ONE_MOVE).unwrap();
    let board = Board::from_layout(&layout, ScriptedRng::new(colors));
    let mut r = RoundController::with_board(board, RecordingAudio::new(), ScoreCounter::new());
    r.start();
    updates(&mut r, LONG_ANIMATION_STEPS);
    assert_eq!(r.phase(), Phase::Steady);
    r
}

/// Refill that leaves no move, followed by a regeneration that rebuilds `ONE_MOVE`
fn dead_end_colors() -> Vec<TileKind> {
    let mut colors = vec![TileKind::Blue, TileKind::Orange, TileKind::Green];
    colors.extend(parse_layout(ONE_MOVE).unwrap().iter().flatten().copied());
    colors
}

fn updates<R: TileRng>(r: &mut Round<R>, n: u32) {
    for _ in 0..n {
        r.update();
    }
}

/// Pixel in the middle of a tile under the default geometry
fn px(c: Coord) -> (i32, i32) {
    let (x, y) = BoardGeometry::DEFAULT.cell_origin(c);
    (x + 30, y + 30)
}

fn press<R: TileRng>(r: &mut Round<R>, c: Coord) {
    let (x, y) = px(c);
    r.handle_pointer(PointerEvent::Press { x, y });
}

fn release(r: &mut Round, c: Coord) {
    let (x, y) = px(c);
    r.handle_pointer(PointerEvent::Release { x, y });
}

fn settle<R: TileRng>(r: &mut Round<R>) {
    for _ in 0..2000 {
        if r.phase() == Phase::Steady {
            return;
        }
        r.update();
    }
    panic!("round never settled, stuck in {:?}", r.phase());
}

#[test]
fn test_board_appears_over_long_animation() {
    let mut r = round();
    assert_eq!(r.phase(), Phase::NoBoard);
    r.update();
    assert_eq!(r.phase(), Phase::NoBoard);

    assert!(r.start());
    assert_eq!(r.phase(), Phase::BoardAppearing);
    updates(&mut r, LONG_ANIMATION_STEPS - 1);
    assert_eq!(r.phase(), Phase::BoardAppearing);
    r.update();
    assert_eq!(r.phase(), Phase::Steady);
    assert_eq!(r.step(), 0);
}

#[test]
fn test_tap_tap_swap_scores_and_settles() {
    let mut r = steady();
    press(&mut r, Coord::new(2, 2));
    assert_eq!(r.phase(), Phase::TileSelected);
    assert_eq!(r.selected(), Some(Coord::new(2, 2)));

    press(&mut r, Coord::new(2, 3));
    assert_eq!(r.phase(), Phase::TileSwitching);
    assert_eq!(r.swap_pair(), Some((Coord::new(2, 2), Coord::new(2, 3))));
    assert_eq!(r.audio().played(), &[Sound::Select, Sound::Select]);
    assert_eq!(r.scoring().score(), 0);

    updates(&mut r, SHORT_ANIMATION_STEPS);
    assert_eq!(r.phase(), Phase::TilesClearing);
    assert_eq!(r.multiplier(), 1);
    assert_eq!(r.scoring().score(), 15);
    assert_eq!(r.scoring().awards(), 1);
    assert_eq!(r.pending().len(), 1);
    assert_eq!(r.audio().played().last(), Some(&Sound::Match1));

    let popup = r.floating_scores()[0];
    assert_eq!(popup.amount, 15);
    assert_eq!(popup.anchor, Coord::new(1, 2));

    updates(&mut r, SHORT_ANIMATION_STEPS);
    assert_eq!(r.phase(), Phase::BoardFilling);

    updates(&mut r, SHORT_ANIMATION_STEPS);
    assert_ne!(r.phase(), Phase::BoardFilling);
    assert!(r.audio().played().contains(&Sound::Fall));

    settle(&mut r);
    assert!(r.board().check().is_empty());
    assert!(r.board().is_settled());
    assert_eq!(r.selected(), None);
    r.update();
    assert_eq!(r.multiplier(), 0);
    assert!(r.scoring().score() >= 15);
}

#[test]
fn test_press_elsewhere_cancels_selection() {
    let mut r = steady();
    press(&mut r, Coord::new(2, 2));
    press(&mut r, Coord::new(5, 5));
    assert_eq!(r.phase(), Phase::Steady);
    assert_eq!(r.selected(), None);
    assert_eq!(r.audio().played(), &[Sound::Select, Sound::Select]);
}

#[test]
fn test_adjacent_swap_without_match_is_rejected() {
    let mut r = steady();
    let before = r.board().layout();
    press(&mut r, Coord::new(2, 2));
    press(&mut r, Coord::new(3, 2));
    assert_eq!(r.phase(), Phase::Steady);
    assert_eq!(r.board().layout(), before);
    assert_eq!(r.scoring().score(), 0);
}

#[test]
fn test_drag_release_on_neighbor_swaps() {
    let mut r = steady();
    press(&mut r, Coord::new(2, 2));
    release(&mut r, Coord::new(2, 3));
    assert_eq!(r.phase(), Phase::TileSwitching);
    assert_eq!(r.audio().played(), &[Sound::Select]);
}

#[test]
fn test_release_never_cancels() {
    let mut r = steady();
    press(&mut r, Coord::new(2, 2));
    release(&mut r, Coord::new(2, 2));
    assert_eq!(r.phase(), Phase::TileSelected);
    release(&mut r, Coord::new(6, 6));
    assert_eq!(r.phase(), Phase::TileSelected);
    assert_eq!(r.selected(), Some(Coord::new(2, 2)));
}

#[test]
fn test_pointer_outside_board_is_ignored() {
    let mut r = steady();
    r.handle_pointer(PointerEvent::Press { x: 10, y: 10 });
    r.handle_pointer(PointerEvent::Press { x: 241 + 65 * 8, y: 100 });
    assert_eq!(r.phase(), Phase::Steady);
    assert!(r.audio().played().is_empty());
}

#[test]
fn test_input_ignored_while_animating() {
    let mut r = round();
    r.start();
    press(&mut r, Coord::new(2, 2));
    assert_eq!(r.phase(), Phase::BoardAppearing);
    assert!(r.audio().played().is_empty());
}

#[test]
fn test_end_game_drains_board_into_summary() {
    let mut r = steady();
    press(&mut r, Coord::new(2, 2));
    assert!(r.end_game());
    assert_eq!(r.phase(), Phase::TimeFinished);
    assert_eq!(r.selected(), None);
    assert!(!r.end_game());

    updates(&mut r, LONG_ANIMATION_STEPS - 1);
    assert_eq!(r.phase(), Phase::TimeFinished);
    r.update();
    assert_eq!(r.phase(), Phase::ShowingSummary);
    assert!(!r.end_game());

    press(&mut r, Coord::new(2, 2));
    assert_eq!(r.phase(), Phase::ShowingSummary);
}

#[test]
fn test_floating_scores_expire() {
    let mut r = steady();
    press(&mut r, Coord::new(2, 2));
    press(&mut r, Coord::new(2, 3));
    updates(&mut r, SHORT_ANIMATION_STEPS);
    assert_eq!(r.floating_scores().len(), 1);
    assert_eq!(r.floating_scores()[0].remaining(), 79);

    settle(&mut r);
    updates(&mut r, 80);
    assert!(r.floating_scores().is_empty());
}

#[test]
fn test_sprites_follow_phase() {
    let mut r = round();
    r.start();
    // From a fixed layout every tile rests in its own row.
    let sprite = r.sprite(Coord::new(4, 6)).unwrap();
    assert_eq!((sprite.x, sprite.y, sprite.alpha), (4.0, 6.0, 1.0));
    assert_eq!(r.sprites().count(), 64);

    updates(&mut r, LONG_ANIMATION_STEPS);
    r.end_game();
    updates(&mut r, 25);
    let sprite = r.sprite(Coord::new(4, 6)).unwrap();
    assert!(sprite.y > 6.0, "tile should be falling away, y = {}", sprite.y);
}

#[test]
fn test_reset_returns_to_no_board() {
    let mut r = RoundController::new(4, SilentAudio, ScoreCounter::new());
    r.start();
    for _ in 0..10 {
        r.update();
    }
    r.reset(5);
    assert_eq!(r.phase(), Phase::NoBoard);
    assert_eq!(r.step(), 0);
    assert!(r.floating_scores().is_empty());
    assert!(r.board().is_settled());
    assert!(r.start());
}

#[test]
fn test_custom_geometry_maps_pointer() {
    let mut r = steady();
    r.set_geometry(BoardGeometry::new(10, 5, 2, 1));
    r.handle_pointer(PointerEvent::Press { x: 14, y: 7 });
    assert_eq!(r.selected(), Some(Coord::new(2, 2)));
    r.handle_pointer(PointerEvent::Release { x: 15, y: 8 });
    assert_eq!(r.phase(), Phase::TileSwitching);
}

#[test]
fn test_refill_cascade_doubles_multiplier() {
    use TileKind::*;
    let mut r = scripted(vec![White, White, White, Red, Red, Yellow]);
    press(&mut r, Coord::new(2, 2));
    press(&mut r, Coord::new(2, 3));
    updates(&mut r, SHORT_ANIMATION_STEPS * 2);
    assert_eq!(r.phase(), Phase::BoardFilling);
    assert_eq!(r.scoring().score(), 15);

    // The three white refills line up along row 0.
    updates(&mut r, SHORT_ANIMATION_STEPS);
    assert_eq!(r.phase(), Phase::TilesClearing);
    assert_eq!(r.multiplier(), 2);
    assert_eq!(r.scoring().score(), 15 + 30);
    assert_eq!(r.scoring().awards(), 2);
    let cascade = r.pending().iter().next().unwrap();
    assert_eq!(
        cascade.coords(),
        &[Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]
    );
    let popup = r.floating_scores().last().unwrap();
    assert_eq!((popup.amount, popup.anchor), (30, Coord::new(1, 0)));

    updates(&mut r, SHORT_ANIMATION_STEPS * 2);
    assert_eq!(r.phase(), Phase::Steady);
    assert_eq!(r.multiplier(), 0);
    assert_eq!(r.scoring().score(), 45);
    assert_eq!(
        r.audio().played(),
        &[
            Sound::Select,
            Sound::Select,
            Sound::Match1,
            Sound::Fall,
            Sound::Match2,
            Sound::Fall
        ]
    );

    let expected = parse_layout([
        "RRYGBPWR", "ROYWROYG", "GBPYGBPW", "YGOPWROY", "PWROYGBP", "OYGBPWRO", "BPWROYGB",
        "ROYGBPWR",
    ])
    .unwrap();
    assert_eq!(r.board().layout(), expected);
    assert!(r.board().is_settled());
}

#[test]
fn test_dead_board_is_replaced() {
    let mut r = scripted(dead_end_colors());
    press(&mut r, Coord::new(2, 2));
    press(&mut r, Coord::new(2, 3));
    updates(&mut r, SHORT_ANIMATION_STEPS * 3);

    assert_eq!(r.phase(), Phase::BoardDisappearing);
    assert!(r.board().solutions().is_empty());
    assert_eq!(r.selected(), None);
    assert_eq!(r.swap_pair(), None);
    assert_eq!(r.audio().played().last(), Some(&Sound::Fall));

    updates(&mut r, LONG_ANIMATION_STEPS - 1);
    assert_eq!(r.phase(), Phase::BoardDisappearing);
    r.update();
    assert_eq!(r.phase(), Phase::BoardAppearing);
    assert_eq!(r.board().layout(), parse_layout(ONE_MOVE).unwrap());

    updates(&mut r, LONG_ANIMATION_STEPS);
    assert_eq!(r.phase(), Phase::Steady);
    assert_eq!(r.multiplier(), 0);
    assert!(r.board().is_settled());
    assert_eq!(r.scoring().score(), 15);
}

#[test]
fn test_first_swap_after_refresh_scores_single() {
    let mut r = scripted(dead_end_colors());
    press(&mut r, Coord::new(2, 2));
    press(&mut r, Coord::new(2, 3));
    updates(&mut r, SHORT_ANIMATION_STEPS * 3 + LONG_ANIMATION_STEPS * 2);
    assert_eq!(r.phase(), Phase::Steady);

    // Select on the very tick the new board lands, before any Steady update.
    press(&mut r, Coord::new(2, 2));
    r.update();
    assert_eq!(r.phase(), Phase::TileSelected);
    press(&mut r, Coord::new(2, 3));
    updates(&mut r, SHORT_ANIMATION_STEPS);

    assert_eq!(r.phase(), Phase::TilesClearing);
    assert_eq!(r.multiplier(), 1);
    assert_eq!(r.scoring().score(), 15 + 15);
    assert_eq!(r.audio().played().last(), Some(&Sound::Match1));
}
