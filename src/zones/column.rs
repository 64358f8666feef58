//! Tableau columns.
//!
//! A `Column` owns its cards bottom-to-top; the top is the last element.
//! Only a face-up suffix is ever handed out as a movable run.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, Sequence};
use crate::core::config::RUN_LENGTH;

/// One of the ten tableau columns.
///
/// ## Usage
///
/// ```
/// use spider_two_suit::cards::{Card, CardId, Suit};
/// use spider_two_suit::zones::Column;
///
/// let mut column = Column::from_cards(vec![
///     Card::new(CardId::new(0), 9, Suit::Hearts),
///     Card::new(CardId::new(1), 8, Suit::Spades).turned_up(),
///     Card::new(CardId::new(2), 7, Suit::Spades).turned_up(),
/// ]);
///
/// assert_eq!(column.movable_subsequence_from(1).map(|s| s.size()), Some(2));
/// assert!(column.movable_subsequence_from(0).is_none());
///
/// let run = column.pop_n(2);
/// assert_eq!(run.len(), 2);
/// assert_eq!(column.reveal_top_if_needed(), Some(CardId::new(0)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    cards: Vec<Card>,
}

impl Column {
    /// Create an empty column.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a column holding `cards`, bottom first.
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

    /// The card at `position`, counting from the bottom.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// The top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// The run from `index` to the top, if it can be picked up.
    ///
    /// Requires `index` in bounds, every card from there up face-up, and the
    /// cards either a single card or a same-suit descending run.
    #[must_use]
    pub fn movable_subsequence_from(&self, index: usize) -> Option<Sequence<'_>> {
        let run = Sequence::new(self.cards.get(index..)?)?;
        if !run.cards().iter().all(|c| c.face_up) {
            return None;
        }
        run.is_descending_same_suit().then_some(run)
    }

    /// The top 13 cards, if they are face-up and form King..Ace in one suit.
    #[must_use]
    pub fn completed_run(&self) -> Option<Sequence<'_>> {
        let start = self.cards.len().checked_sub(RUN_LENGTH)?;
        let run = self.movable_subsequence_from(start)?;
        run.is_complete_run().then_some(run)
    }

    /// Remove the top `n` cards, returned bottom first.
    ///
    /// Callers check bounds; asking for more than the column holds takes
    /// everything.
    pub fn pop_n(&mut self, n: usize) -> Vec<Card> {
        let at = self.cards.len().saturating_sub(n);
        self.cards.split_off(at)
    }

    /// Append a run to the top, keeping its order.
    pub fn push_sequence(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Append a single card.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Flip a face-down top card face-up.
    ///
    /// Returns the flipped card's id, or `None` when the column is empty or
    /// the top was already showing. Calling it twice is harmless.
    pub fn reveal_top_if_needed(&mut self) -> Option<CardId> {
        let top = self.cards.last_mut()?;
        if top.face_up {
            return None;
        }
        top.face_up = true;
        Some(top.id)
    }

    /// Flip the card at `position` face-down. Returns its id.
    pub fn conceal(&mut self, position: usize) -> Option<CardId> {
        let card = self.cards.get_mut(position)?;
        card.face_up = false;
        Some(card.id)
    }
}
