//! Terminal runner (default binary).
//!
//! Owns the fixed-timestep loop: render every frame, poll input with a
//! timeout until the next tick, feed elapsed time to the engine. The engine
//! never sees key repeats; one command per physical press.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_blockfall::core::Game;
use tui_blockfall::input::{handle_key_event, should_quit, wants_restart};
use tui_blockfall::term::{GameView, TerminalRenderer, Viewport};
use tui_blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut seed: u32 = 1;
    let mut game = Game::new(seed);
    let view = GameView::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game.snapshot(), Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if wants_restart(key) {
                        seed = seed.wrapping_add(1);
                        game = Game::new(seed);
                    } else if let Some(command) = handle_key_event(key) {
                        game.apply(command);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                // Repeat and Release events are dropped: one command per press.
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.update(TICK_MS);
        }
    }
}
