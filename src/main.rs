//! Terminal Game of Life runner (default binary).
//!
//! Seeds a random soup onto the torus, then renders one generation per step
//! interval until the user quits. Uses crossterm for input and a
//! framebuffer-based diff renderer (no TUI widget framework).

use std::env;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_life::core::{Grid, RandomSoup, Simulator};
use tui_life::input::{action_for_key, should_quit};
use tui_life::term::{FrameBuffer, Hud, LifeView, TerminalRenderer, Viewport};
use tui_life::types::{
    SimAction, GRID_HEIGHT, GRID_WIDTH, MAX_STEP_INTERVAL_MS, MIN_STEP_INTERVAL_MS,
    SEED_ALIVE_ONE_IN, STEP_INTERVAL_MS,
};

fn main() -> Result<()> {
    let seed = seed_from_args().unwrap_or_else(seed_from_clock);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state before printing anything.
    let _ = term.exit();
    println!("Conway's Game of Life");
    result
}

/// Optional explicit seed as the first argument, for reproducible runs.
fn seed_from_args() -> Option<u32> {
    env::args().nth(1)?.parse().ok()
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, seed: u32) -> Result<()> {
    let mut soup = RandomSoup::new(seed, SEED_ALIVE_ONE_IN);
    let grid = Grid::new(GRID_WIDTH, GRID_HEIGHT, |_, _| soup.sample())?;
    let mut sim = Simulator::new(grid);

    let view = LifeView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut paused = false;
    let mut step_ms = STEP_INTERVAL_MS;
    let mut reseeds: u32 = 0;
    let mut last_step = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&sim, Viewport::new(w, h), Hud { paused, step_ms }, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next step. While paused the step
        // clock is idle, so just wait a full interval per poll.
        let interval = Duration::from_millis(step_ms);
        let timeout = if paused {
            interval
        } else {
            interval
                .checked_sub(last_step.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0))
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match action_for_key(key) {
                        Some(SimAction::TogglePause) => paused = !paused,
                        Some(SimAction::SpeedUp) => {
                            step_ms = (step_ms / 2).max(MIN_STEP_INTERVAL_MS);
                        }
                        Some(SimAction::SlowDown) => {
                            step_ms = (step_ms * 2).min(MAX_STEP_INTERVAL_MS);
                        }
                        Some(SimAction::Reseed) => {
                            // A fresh soup per reseed, still reproducible from
                            // the starting seed.
                            reseeds += 1;
                            let mut soup =
                                RandomSoup::new(seed.wrapping_add(reseeds), SEED_ALIVE_ONE_IN);
                            sim.reseed(|_, _| soup.sample());
                            last_step = Instant::now();
                        }
                        None => {}
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Step.
        if !paused && last_step.elapsed() >= interval {
            sim.step();
            last_step = Instant::now();
        }
    }
}
