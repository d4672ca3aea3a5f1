//! Keyboard input: maps terminal key events to UI commands.

pub mod map;

pub use map::{map_key, should_quit, Command, Direction};
