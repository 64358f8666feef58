//! Read-only snapshots for the presentation layer.
//!
//! A `GameView` carries exactly what a renderer needs (per-column cards with
//! value, suit and orientation, plus counters) and nothing it could use to
//! mutate the game. It derives serde so a front end can persist or ship it
//! in whatever format it likes.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};

/// What a renderer sees of one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardView {
    pub value: u8,
    pub suit: Suit,
    pub face_up: bool,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            value: card.value,
            suit: card.suit,
            face_up: card.face_up,
        }
    }
}

/// Point-in-time view of a whole game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Columns bottom-to-top.
    pub columns: Vec<Vec<CardView>>,
    pub stock_remaining: usize,
    pub removed_sequences: usize,
    pub history_len: usize,
}

impl GameView {
    /// Cards currently on the tableau.
    #[must_use]
    pub fn tableau_cards(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }
}
