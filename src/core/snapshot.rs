//! Read-only state snapshots consumed by the presentation layer.

use arrayvec::ArrayVec;

use crate::core::deck::Card;
use crate::types::{Difficulty, MAX_CARDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSnapshot {
    pub id: usize,
    pub symbol: &'static str,
    pub is_flipped: bool,
    pub is_matched: bool,
}

impl From<Card> for CardSnapshot {
    fn from(value: Card) -> Self {
        Self {
            id: value.id,
            symbol: value.symbol,
            is_flipped: value.is_flipped,
            is_matched: value.is_matched,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub cards: ArrayVec<CardSnapshot, MAX_CARDS>,
    pub difficulty: Difficulty,
    pub moves: u32,
    pub elapsed_secs: u32,
    pub best_time: Option<u32>,
    pub started: bool,
    pub checking: bool,
    pub game_over: bool,
    pub round_id: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.cards.clear();
        self.difficulty = Difficulty::default();
        self.moves = 0;
        self.elapsed_secs = 0;
        self.best_time = None;
        self.started = false;
        self.checking = false;
        self.game_over = false;
        self.round_id = 0;
        self.seed = 0;
    }

    /// Whether the round currently accepts flip intents.
    pub fn accepts_flips(&self) -> bool {
        !self.checking && !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cards: ArrayVec::new(),
            difficulty: Difficulty::default(),
            moves: 0,
            elapsed_secs: 0,
            best_time: None,
            started: false,
            checking: false,
            game_over: false,
            round_id: 0,
            seed: 0,
        }
    }
}
