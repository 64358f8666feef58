//! # spider-two-suit
//!
//! Rule engine for two-suit Spider patience.
//!
//! ## Design Principles
//!
//! 1. **Total Operations**: Invalid moves are ordinary play. Every operation
//!    either applies completely or changes nothing and says no.
//!
//! 2. **Exact Undo**: Each action records precisely what it changed,
//!    including which hidden cards it turned over, so undo restores the
//!    previous state card for card.
//!
//! 3. **Cards Are Owned**: A card lives in exactly one container at a time
//!    and moves by value. The 104-card total is checked after every
//!    operation in debug builds.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, rule constants, errors
//! - `cards`: Cards, sequences, the deck factory
//! - `zones`: Columns and the stock
//! - `game`: The engine, its move history and read-only views
//!
//! Rendering, input handling, timers and move counters belong to the
//! caller; the engine only exposes state and the four actions.

pub mod core;
pub mod cards;
pub mod zones;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    DealError, GameConfig, GameRng, MoveError, SetupError, UndoError,
    COLUMN_COUNT, DECK_SIZE, RUN_LENGTH, TOTAL_RUNS,
};

pub use crate::cards::{create_two_suit_double_deck, Card, CardId, Sequence, Suit};

pub use crate::zones::{Column, Stock};

pub use crate::game::{CardView, Game, GameView, Move, MoveOutcome, Undone};
