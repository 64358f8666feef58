//! Card system: cards, sequences, and the deck factory.
//!
//! ## Key Types
//!
//! - `CardId`: Stable identity of one physical card
//! - `Card`: Value, suit and face orientation
//! - `Sequence`: Borrowed view used to validate runs
//! - `create_two_suit_double_deck`: The 104-card deck

pub mod card;
pub mod deck;
pub mod sequence;

pub use card::{Card, CardId, Suit, ACE, KING};
pub use deck::{create_two_suit_double_deck, COPIES_PER_CARD};
pub use sequence::Sequence;
