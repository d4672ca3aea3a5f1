//! Terminal Memory Matrix runner (default binary).
//!
//! Single-threaded event loop: poll for key events with a timeout aligned to
//! the next tick, feed intents into the core, tick the core's timers, and
//! redraw from a fresh snapshot whenever something changed.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use memory_matrix::core::GameState;
use memory_matrix::input::{map_key, should_quit, Command, Direction};
use memory_matrix::store::BestTimeStore;
use memory_matrix::term::{GameView, TerminalRenderer, Viewport};
use memory_matrix::types::{Difficulty, GameAction, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut store = BestTimeStore::open_default();
    let mut state = GameState::new(Difficulty::default(), rand::random());
    state.set_best_time(store.load(state.difficulty()));

    let view = GameView::default();
    let mut cursor: usize = 0;
    let mut dirty = true;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let fb = view.render(&state.snapshot(), cursor, Viewport::new(w, h));
            term.draw(&fb)?;
            dirty = false;
        }

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
                    if let Some(command) = map_key(key) {
                        dirty |= handle_command(command, &mut state, &store, &mut cursor);
                    }
                }
                Event::Resize(_, _) => {
                    dirty = true;
                }
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            dirty |= state.tick(elapsed.as_millis() as u32);
        }

        // Persist a completed round (match resolution happens on flip, so
        // check after both input and tick).
        if let Some(done) = state.take_completion() {
            let _ = store.save(done.difficulty, done.elapsed_secs);
            state.set_best_time(store.load(done.difficulty));
            dirty = true;
        }
    }
}

fn handle_command(
    command: Command,
    state: &mut GameState,
    store: &BestTimeStore,
    cursor: &mut usize,
) -> bool {
    match command {
        Command::MoveCursor(direction) => move_cursor(cursor, direction, state.difficulty()),
        Command::FlipAtCursor => state.apply_action(GameAction::Flip(*cursor)),
        Command::SelectDifficulty(level) => {
            state.apply_action(GameAction::SelectDifficulty(level));
            state.set_best_time(store.load(level));
            *cursor = 0;
            true
        }
        Command::Restart => {
            state.apply_action(GameAction::Restart);
            state.set_best_time(store.load(state.difficulty()));
            *cursor = 0;
            true
        }
    }
}

/// Move the cursor on the difficulty's card grid, clamped at the edges.
fn move_cursor(cursor: &mut usize, direction: Direction, difficulty: Difficulty) -> bool {
    let (cols, rows) = difficulty.grid();
    let (cols, rows) = (cols as usize, rows as usize);
    let (col, row) = (*cursor % cols, *cursor / cols);

    let (col, row) = match direction {
        Direction::Up => (col, row.saturating_sub(1)),
        Direction::Down => (col, (row + 1).min(rows - 1)),
        Direction::Left => (col.saturating_sub(1), row),
        Direction::Right => ((col + 1).min(cols - 1), row),
    };

    let next = row * cols + col;
    let moved = next != *cursor;
    *cursor = next;
    moved
}
