//! Game state module - the authoritative round state machine
//!
//! A round moves through Idle -> Playing -> Checking -> Playing ... ->
//! GameOver. Flipping the second card of a turn hands off synchronously to
//! match evaluation; a mismatch arms a delayed face-down reset that is
//! counted down by `tick`. All timing enters through `tick(elapsed_ms)`, so
//! resetting the round atomically cancels the clock and any pending
//! mismatch reveal.

use arrayvec::ArrayVec;

use crate::core::deck::{self, Deck};
use crate::core::snapshot::{CardSnapshot, GameSnapshot};
use crate::core::rng::SimpleRng;
use crate::types::{Difficulty, GameAction, CLOCK_SECOND_MS, MISMATCH_DELAY_MS};

/// Pending face-down reset armed by a mismatched pair.
///
/// Tagged with the round it belongs to; an expiry whose tag no longer
/// matches the live round is discarded without touching the cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MismatchTimer {
    remaining_ms: u32,
    round_id: u32,
}

/// One-shot event recorded when a round transitions into game over
/// (consumed by the caller to persist the best time and show the banner).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundCompleted {
    pub difficulty: Difficulty,
    pub moves: u32,
    pub elapsed_secs: u32,
    /// Whether this completion beat (or established) the loaded best time.
    pub new_best: bool,
}

/// Complete round state
#[derive(Debug, Clone)]
pub struct GameState {
    difficulty: Difficulty,
    cards: Deck,
    /// Cards face-up awaiting evaluation (ids double as deck indices).
    flipped: ArrayVec<usize, 2>,
    moves: u32,
    elapsed_secs: u32,
    clock_acc_ms: u32,
    started: bool,
    checking: bool,
    game_over: bool,
    /// Monotonic round id (increments on every reset).
    round_id: u32,
    /// Best recorded time for the current difficulty, installed by the
    /// caller from the store after each reset.
    best_time: Option<u32>,
    mismatch: Option<MismatchTimer>,
    completion: Option<RoundCompleted>,
    rng: SimpleRng,
}

impl GameState {
    /// Create a new round for the given difficulty and RNG seed
    pub fn new(difficulty: Difficulty, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let cards = deck::deck_for(difficulty, &mut rng);

        Self {
            difficulty,
            cards,
            flipped: ArrayVec::new(),
            moves: 0,
            elapsed_secs: 0,
            clock_acc_ms: 0,
            started: false,
            checking: false,
            game_over: false,
            round_id: 0,
            best_time: None,
            mismatch: None,
            completion: None,
            rng,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn cards(&self) -> &[deck::Card] {
        &self.cards
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn checking(&self) -> bool {
        self.checking
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn round_id(&self) -> u32 {
        self.round_id
    }

    pub fn best_time(&self) -> Option<u32> {
        self.best_time
    }

    /// Install the persisted best time for display and comparison.
    ///
    /// Resets clear this value; the caller reloads it from the store.
    pub fn set_best_time(&mut self, best: Option<u32>) {
        self.best_time = best;
    }

    /// Flip a card face-up.
    ///
    /// Returns false (with no state change) while a pair is being checked,
    /// after game over, when two cards already await evaluation, when the id
    /// is out of range, or when the card is already face-up or matched.
    /// Rejected flips are dropped, never queued.
    pub fn flip(&mut self, card_id: usize) -> bool {
        if self.checking || self.game_over || self.flipped.is_full() {
            return false;
        }
        let Some(card) = self.cards.get_mut(card_id) else {
            return false;
        };
        if card.is_flipped || card.is_matched {
            return false;
        }

        card.is_flipped = true;
        self.flipped.push(card_id);

        // First flip of the round starts the clock.
        if !self.started {
            self.started = true;
        }

        if self.flipped.is_full() {
            self.checking = true;
            self.moves += 1;
            self.evaluate_pair();
        }

        true
    }

    /// Decide the outcome for the two cards awaiting evaluation.
    fn evaluate_pair(&mut self) {
        let (first, second) = (self.flipped[0], self.flipped[1]);

        if self.cards[first].symbol == self.cards[second].symbol {
            // Match: resolve synchronously, no delay.
            self.cards[first].is_matched = true;
            self.cards[second].is_matched = true;
            self.flipped.clear();
            self.checking = false;
            self.check_completion();
        } else {
            // Mismatch: leave both face-up until the reveal delay expires.
            self.mismatch = Some(MismatchTimer {
                remaining_ms: MISMATCH_DELAY_MS,
                round_id: self.round_id,
            });
        }
    }

    /// Completion check, run after every match resolution.
    fn check_completion(&mut self) {
        if self.cards.is_empty() || !self.cards.iter().all(|c| c.is_matched) {
            return;
        }

        self.game_over = true;
        let new_best = self.best_time.map_or(true, |best| self.elapsed_secs < best);
        if new_best {
            self.best_time = Some(self.elapsed_secs);
        }
        self.completion = Some(RoundCompleted {
            difficulty: self.difficulty,
            moves: self.moves,
            elapsed_secs: self.elapsed_secs,
            new_best,
        });
    }

    /// Take and clear the game-over event.
    pub fn take_completion(&mut self) -> Option<RoundCompleted> {
        self.completion.take()
    }

    /// Discard the current round and start a fresh one at a new difficulty.
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.reset_round();
    }

    /// Discard the current round and start a fresh one at the same difficulty.
    pub fn restart(&mut self) {
        self.reset_round();
    }

    fn reset_round(&mut self) {
        self.round_id = self.round_id.wrapping_add(1);
        self.cards = deck::deck_for(self.difficulty, &mut self.rng);
        self.flipped.clear();
        self.moves = 0;
        self.elapsed_secs = 0;
        self.clock_acc_ms = 0;
        self.started = false;
        self.checking = false;
        self.game_over = false;
        self.best_time = None;
        self.mismatch = None;
        self.completion = None;
    }

    /// Apply a game intent
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Flip(card_id) => self.flip(card_id),
            GameAction::SelectDifficulty(level) => {
                self.select_difficulty(level);
                true
            }
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Advance timers: the round clock and any pending mismatch reveal.
    ///
    /// Returns whether anything visible changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let mut changed = false;

        // Round clock: one elapsed second per accumulated 1000ms, running
        // from the first flip until game over.
        if self.started && !self.game_over {
            self.clock_acc_ms += elapsed_ms;
            while self.clock_acc_ms >= CLOCK_SECOND_MS {
                self.clock_acc_ms -= CLOCK_SECOND_MS;
                self.elapsed_secs += 1;
                changed = true;
            }
        }

        if let Some(timer) = self.mismatch {
            let remaining_ms = timer.remaining_ms.saturating_sub(elapsed_ms);
            if remaining_ms == 0 {
                self.mismatch = None;
                // A stale tag must never touch the live round's cards.
                if timer.round_id == self.round_id {
                    self.resolve_mismatch();
                    changed = true;
                }
            } else {
                self.mismatch = Some(MismatchTimer {
                    remaining_ms,
                    ..timer
                });
            }
        }

        changed
    }

    /// Delayed half of a mismatch: turn every unmatched card face-down.
    ///
    /// Broader than the two evaluated cards: any stray flipped state is
    /// swept up with them.
    fn resolve_mismatch(&mut self) {
        for card in self.cards.iter_mut().filter(|c| !c.is_matched) {
            card.is_flipped = false;
        }
        self.flipped.clear();
        self.checking = false;
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.cards.clear();
        out.cards
            .extend(self.cards.iter().map(|&card| CardSnapshot::from(card)));
        out.difficulty = self.difficulty;
        out.moves = self.moves;
        out.elapsed_secs = self.elapsed_secs;
        out.best_time = self.best_time;
        out.started = self.started;
        out.checking = self.checking;
        out.game_over = self.game_over;
        out.round_id = self.round_id;
        out.seed = self.rng.state();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Difficulty::default(), 1)
    }
}
