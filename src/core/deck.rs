//! Deck generation: a shuffled, paired set of symbol cards for a round.

use arrayvec::ArrayVec;

use crate::core::rng::SimpleRng;
use crate::error::ConfigError;
use crate::types::{Difficulty, MAX_CARDS, SYMBOL_ALPHABET};

/// A single card in a round.
///
/// The id doubles as the card's position in the deck; it is assigned after
/// the final shuffle and stays stable for the lifetime of the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub id: usize,
    pub symbol: &'static str,
    pub is_flipped: bool,
    pub is_matched: bool,
}

pub type Deck = ArrayVec<Card, MAX_CARDS>;

/// Generate a shuffled deck of `2 * pair_count` cards.
///
/// Fails with [`ConfigError::PairCountOutOfRange`] when `pair_count` is zero
/// or exceeds the symbol alphabet, since a round needs that many distinct
/// symbols.
pub fn generate_round(pair_count: usize, rng: &mut SimpleRng) -> Result<Deck, ConfigError> {
    if pair_count == 0 || pair_count > SYMBOL_ALPHABET.len() {
        return Err(ConfigError::PairCountOutOfRange {
            requested: pair_count,
            max: SYMBOL_ALPHABET.len(),
        });
    }
    Ok(deal(pair_count, rng))
}

/// Deck for a difficulty level. Infallible: difficulty pair counts are
/// enum-bounded and checked against the alphabet at compile time.
pub fn deck_for(difficulty: Difficulty, rng: &mut SimpleRng) -> Deck {
    deal(difficulty.pair_count(), rng)
}

fn deal(pair_count: usize, rng: &mut SimpleRng) -> Deck {
    debug_assert!((1..=SYMBOL_ALPHABET.len()).contains(&pair_count));

    // Shuffling the whole alphabet and truncating gives a uniform random
    // subset with no bias toward alphabet order.
    let mut pool = SYMBOL_ALPHABET;
    rng.shuffle(&mut pool);
    let drawn = &pool[..pair_count];

    // Duplicate the drawn set, then shuffle the combined multiset so pairs
    // do not sit in a predictable pattern.
    let mut symbols: ArrayVec<&'static str, MAX_CARDS> = ArrayVec::new();
    symbols.extend(drawn.iter().copied());
    symbols.extend(drawn.iter().copied());
    rng.shuffle(&mut symbols);

    symbols
        .into_iter()
        .enumerate()
        .map(|(id, symbol)| Card {
            id,
            symbol,
            is_flipped: false,
            is_matched: false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_for_matches_difficulty_size() {
        let mut rng = SimpleRng::new(1);
        for level in Difficulty::ALL {
            let deck = deck_for(level, &mut rng);
            assert_eq!(deck.len(), level.card_count());
        }
    }

    #[test]
    fn test_cards_start_face_down() {
        let mut rng = SimpleRng::new(42);
        let deck = deck_for(Difficulty::Medium, &mut rng);
        assert!(deck.iter().all(|c| !c.is_flipped && !c.is_matched));
    }

    #[test]
    fn test_ids_are_positional() {
        let mut rng = SimpleRng::new(42);
        let deck = deck_for(Difficulty::Hard, &mut rng);
        for (i, card) in deck.iter().enumerate() {
            assert_eq!(card.id, i);
        }
    }

    #[test]
    fn test_pair_count_bounds() {
        let mut rng = SimpleRng::new(1);
        assert_eq!(
            generate_round(0, &mut rng),
            Err(ConfigError::PairCountOutOfRange {
                requested: 0,
                max: SYMBOL_ALPHABET.len()
            })
        );
        assert_eq!(
            generate_round(SYMBOL_ALPHABET.len() + 1, &mut rng),
            Err(ConfigError::PairCountOutOfRange {
                requested: SYMBOL_ALPHABET.len() + 1,
                max: SYMBOL_ALPHABET.len()
            })
        );
        assert!(generate_round(SYMBOL_ALPHABET.len(), &mut rng).is_ok());
    }
}
