//! Terminal Snake runner (default binary).
//!
//! Single-threaded tick loop, the same shape the original firmware had:
//! read input -> step the engine -> render. The engine owns the board
//! exclusively; input and rendering only feed it moves or read from it.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::Game;
use tui_snake::input::{handle_key_event, is_restart, should_quit, DirectionReader};
use tui_snake::term::{FrameBuffer, MatrixView, TerminalRenderer, Viewport};
use tui_snake::types::{GameStatus, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = Game::new(wall_clock_seed());
    game.start();

    let view = MatrixView::default();
    let mut reader = DirectionReader::new();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    // A finished game stays on screen for one tick before the reset.
    let mut pending_reset = false;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if is_restart(key) {
                        game.reset();
                        reader.clear();
                        pending_reset = false;
                    }
                    if let Some(dir) = handle_key_event(key) {
                        reader.record(dir);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            if pending_reset {
                // Reset boundary: fresh board and snack, and no held input
                // leaking into the new game's first move.
                game.reset();
                reader.clear();
                pending_reset = false;
                continue;
            }

            if game.status() == GameStatus::Running {
                let dir = reader.take(game.direction());
                let outcome = game.step(dir);
                if outcome.is_terminal() {
                    pending_reset = true;
                }
            }
        }
    }
}

/// Seed the snack RNG from wall-clock nanos so every run differs.
fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}
