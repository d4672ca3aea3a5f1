//! Core module - pure game logic with no external dependencies
//!
//! This module contains the deck generator, the round state machine, and the
//! snapshot type the presentation layer renders from. It has zero
//! dependencies on UI, persistence, or I/O; all timing enters through
//! `GameState::tick`.

pub mod deck;
pub mod game_state;
pub mod rng;
pub mod snapshot;

// Re-export commonly used types
pub use deck::{deck_for, generate_round, Card, Deck};
pub use game_state::{GameState, RoundCompleted};
pub use rng::SimpleRng;
pub use snapshot::{CardSnapshot, GameSnapshot};
