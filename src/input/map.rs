//! Key mapping from terminal events to UI commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Difficulty;

/// Cursor movement direction on the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A command produced by a key press.
///
/// Cursor movement and flip-at-cursor are presentation concerns; the event
/// loop resolves the cursor into a card id before talking to the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveCursor(Direction),
    FlipAtCursor,
    SelectDifficulty(Difficulty),
    Restart,
}

/// Map keyboard input to UI commands.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        // Cursor movement
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Command::MoveCursor(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(Command::MoveCursor(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(Command::MoveCursor(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(Command::MoveCursor(Direction::Right)),

        // Flip
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::FlipAtCursor),

        // Difficulty
        KeyCode::Char('1') => Some(Command::SelectDifficulty(Difficulty::Easy)),
        KeyCode::Char('2') => Some(Command::SelectDifficulty(Difficulty::Medium)),
        KeyCode::Char('3') => Some(Command::SelectDifficulty(Difficulty::Hard)),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
