//! The fixed two-suit double deck.

use super::card::{Card, CardId, Suit, ACE, KING};
use crate::core::config::DECK_SIZE;

/// Physical copies of each value/suit pair. Two doubled decks of two suits
/// give four of each, which is what makes 104 cards.
pub const COPIES_PER_CARD: usize = 4;

/// Build all 104 cards, face-down, with ids `0..104`.
///
/// Order is copy, then suit, then value; callers shuffle.
///
/// Panics if the count is not 104, which would be a programming error.
#[must_use]
pub fn create_two_suit_double_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    let mut next_id = 0u8;

    for _ in 0..COPIES_PER_CARD {
        for suit in Suit::ALL {
            for value in ACE..=KING {
                cards.push(Card::new(CardId::new(next_id), value, suit));
                next_id += 1;
            }
        }
    }

    assert_eq!(cards.len(), DECK_SIZE, "Deck must hold exactly {} cards", DECK_SIZE);
    cards
}
