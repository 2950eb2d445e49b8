//! Terminal match-3 runner (default binary).
//!
//! Mouse-driven: press a tile, then press or release on a neighbor to swap.
//! Uses crossterm for input and the framebuffer renderer from the term crate.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::LevelFilter;

use tui_match3::core::GameSession;
use tui_match3::host::{logging, FileScoreStore, GameConfig};
use tui_match3::input::{handle_key_event, handle_mouse_event, Command};
use tui_match3::term::{BellAudio, FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_match3::types::TICK_MS;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    if let Some(path) = &config.log_path {
        logging::init(path, LevelFilter::Debug)?;
    }
    log::info!("starting with seed {}", config.seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let store = FileScoreStore::new(&config.score_file);
    let mut session = GameSession::new(config.session(), BellAudio::new(config.bell), store);
    session.start();

    let view = GameView::default();
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    session.round_mut().set_geometry(view.board_geometry(viewport));
    let mut fb = FrameBuffer::new(w, h);

    let tick_duration = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        view.render_into(&session, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match handle_key_event(key) {
                        Some(Command::Quit) => return Ok(()),
                        Some(Command::Restart) => session.restart(),
                        None => {}
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(pointer) = handle_mouse_event(mouse) {
                        session.handle_pointer(pointer);
                    }
                }
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    session.round_mut().set_geometry(view.board_geometry(viewport));
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TICK_MS);
        }
    }
}
