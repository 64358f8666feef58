//! Borrowed views over consecutive cards.

use super::card::{Card, KING};
use crate::core::config::RUN_LENGTH;

/// A non-empty, non-owning view of consecutive cards from one column.
///
/// Sequences exist only to validate a run before it is moved; they never
/// hold cards themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sequence<'a> {
    cards: &'a [Card],
}

impl<'a> Sequence<'a> {
    /// Wrap a slice. Returns `None` for an empty slice.
    #[must_use]
    pub fn new(cards: &'a [Card]) -> Option<Self> {
        if cards.is_empty() {
            None
        } else {
            Some(Self { cards })
        }
    }

    /// True for a single card, or when every card is one below the previous
    /// in the same suit.
    #[must_use]
    pub fn is_descending_same_suit(&self) -> bool {
        self.cards
            .windows(2)
            .all(|pair| pair[1].follows_in_suit(&pair[0]))
    }

    /// A full King..Ace run of one suit.
    #[must_use]
    pub fn is_complete_run(&self) -> bool {
        self.size() == RUN_LENGTH && self.base().value == KING && self.is_descending_same_suit()
    }

    /// First (lowest in the column) card.
    #[must_use]
    pub fn base(&self) -> &'a Card {
        &self.cards[0]
    }

    /// Last (topmost) card.
    #[must_use]
    pub fn top(&self) -> &'a Card {
        &self.cards[self.cards.len() - 1]
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn cards(&self) -> &'a [Card] {
        self.cards
    }
}
