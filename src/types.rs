//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// The fixed pool of card symbols. A round draws a random subset of these
/// and duplicates each drawn symbol once to form pairs.
pub const SYMBOL_ALPHABET: [&str; 15] = [
    "♠", "♥", "♦", "♣", "★", "☀", "☾", "♪", "⚑", "☘", "⚙", "☂", "✿", "♞", "⚓",
];

/// Upper bound on cards in a round (every alphabet symbol paired).
pub const MAX_CARDS: usize = SYMBOL_ALPHABET.len() * 2;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const CLOCK_SECOND_MS: u32 = 1000;
pub const MISMATCH_DELAY_MS: u32 = 1000;

/// Difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Number of distinct symbols in a round; each appears exactly twice.
    pub const fn pair_count(self) -> usize {
        match self {
            Difficulty::Easy => 4,
            Difficulty::Medium => 8,
            Difficulty::Hard => 12,
        }
    }

    pub const fn card_count(self) -> usize {
        self.pair_count() * 2
    }

    /// Card grid shape (columns, rows) for this difficulty.
    pub const fn grid(self) -> (u16, u16) {
        match self {
            Difficulty::Easy => (4, 2),
            Difficulty::Medium => (4, 4),
            Difficulty::Hard => (6, 4),
        }
    }

    /// Key under which this difficulty's best time is persisted.
    pub const fn storage_key(self) -> &'static str {
        match self {
            Difficulty::Easy => "bestTime_Easy",
            Difficulty::Medium => "bestTime_Medium",
            Difficulty::Hard => "bestTime_Hard",
        }
    }

    /// Parse difficulty from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

// A round needs pair_count distinct symbols, so every difficulty must fit
// inside the alphabet.
const _: () = assert!(Difficulty::Hard.pair_count() <= SYMBOL_ALPHABET.len());

/// Intents accepted by the game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Flip(usize),
    SelectDifficulty(Difficulty),
    Restart,
}
