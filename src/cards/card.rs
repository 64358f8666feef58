//! Playing cards: identity, rank, suit and face orientation.
//!
//! A `Card` is a value owned by exactly one container at a time (a column,
//! the stock, or a completed run in history). It is `Clone` for inspection
//! but deliberately not `Copy`, so moving a card between containers is an
//! ownership transfer the compiler can see.

use serde::{Deserialize, Serialize};

/// Stable identity of one physical card.
///
/// Used only to confirm "this exact card" during undo, never for game logic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// The two suits of the two-suit variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
}

impl Suit {
    /// Both suits, in deck order.
    pub const ALL: [Suit; 2] = [Suit::Spades, Suit::Hearts];

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
        }
    }
}

/// Lowest card value (Ace).
pub const ACE: u8 = 1;

/// Highest card value (King).
pub const KING: u8 = 13;

/// A single card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Identity, unique within a deck.
    pub id: CardId,

    /// 1 = Ace, 11 = Jack, 12 = Queen, 13 = King.
    pub value: u8,

    pub suit: Suit,

    /// Is this card showing its face?
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    ///
    /// Panics if `value` is outside `1..=13`.
    #[must_use]
    pub fn new(id: CardId, value: u8, suit: Suit) -> Self {
        assert!((ACE..=KING).contains(&value), "Card value {} out of range", value);
        Self {
            id,
            value,
            suit,
            face_up: false,
        }
    }

    /// Same card, face-up.
    #[must_use]
    pub fn turned_up(mut self) -> Self {
        self.face_up = true;
        self
    }

    /// Is this card exactly one value below `other`?
    #[must_use]
    pub fn is_one_below(&self, other: &Card) -> bool {
        self.value + 1 == other.value
    }

    /// Can this card continue a same-suit run under `previous`?
    #[must_use]
    pub fn follows_in_suit(&self, previous: &Card) -> bool {
        self.suit == previous.suit && self.is_one_below(previous)
    }

    /// Short rank label: A, 2..10, J, Q, K.
    #[must_use]
    pub fn rank_label(&self) -> String {
        match self.value {
            1 => "A".to_string(),
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            v => v.to_string(),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank_label(), self.suit.symbol())
    }
}
