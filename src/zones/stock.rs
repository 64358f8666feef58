//! The undealt reserve.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::config::COLUMN_COUNT;

/// Face-down cards waiting to be dealt. Deals take from the end.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    cards: Vec<Card>,
}

impl Stock {
    /// Create a stock from `cards`; the last card is dealt first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Enough cards remain for one card per column.
    #[must_use]
    pub fn can_deal(&self) -> bool {
        self.cards.len() >= COLUMN_COUNT
    }

    /// Full deals left.
    #[must_use]
    pub fn deals_remaining(&self) -> usize {
        self.cards.len() / COLUMN_COUNT
    }

    /// Take the last `n` cards in draw order (the last stock card first).
    ///
    /// Returns `None` without touching the stock if fewer than `n` remain.
    pub fn take_batch(&mut self, n: usize) -> Option<Vec<Card>> {
        let at = self.cards.len().checked_sub(n)?;
        let mut batch = self.cards.split_off(at);
        batch.reverse();
        Some(batch)
    }

    /// Return a card to the end of the stock, face-down.
    pub fn put_back(&mut self, mut card: Card) {
        card.face_up = false;
        self.cards.push(card);
    }
}
