//! Rejection and failure reasons.
//!
//! Invalid moves are an ordinary part of play, so every game operation
//! reports them as values. The `bool` entry points on [`Game`](crate::Game)
//! collapse these to `false`; the `try_*` forms keep the reason.

use thiserror::Error;

use crate::cards::{CardId, Suit};

/// Why a move was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("column {0} does not exist")]
    NoSuchColumn(usize),

    #[error("source and destination are both column {0}")]
    SameColumn(usize),

    #[error("no movable run starts at card {index} of column {column}")]
    NotMovable { column: usize, index: usize },

    #[error("a run based on value {base} cannot be placed on value {top}")]
    Rejected { base: u8, top: u8 },
}

/// Why a deal from the stock was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DealError {
    #[error("column {0} is empty")]
    EmptyColumn(usize),

    #[error("stock holds {remaining} cards, a deal needs {needed}")]
    StockExhausted { remaining: usize, needed: usize },
}

/// Why an undo did not happen.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UndoError {
    #[error("nothing to undo")]
    EmptyHistory,

    /// The board no longer matches the recorded move. Only reachable if an
    /// earlier operation broke card conservation.
    #[error("history corrupted: expected {expected} at column {column} position {position}, found {found:?}")]
    HistoryCorrupted {
        column: usize,
        position: usize,
        expected: CardId,
        found: Option<CardId>,
    },

    #[error("history corrupted: column {column} holds {found} cards, undo needs {needed}")]
    MissingCards {
        column: usize,
        needed: usize,
        found: usize,
    },

    #[error("history corrupted: column {0} does not exist")]
    NoSuchColumn(usize),

    #[error("history corrupted: removed run from column {0} does not hold the moved cards")]
    RunMismatch(usize),
}

/// Why a game could not be set up from a config or an arranged position.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("expected {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },

    #[error("column {0} would start empty")]
    EmptyStartingColumn(usize),

    #[error("layout needs {requested} cards but the deck holds {available}")]
    LayoutTooLarge { requested: usize, available: usize },

    #[error("expected {expected} cards in play, found {found}")]
    CardCount { expected: usize, found: usize },

    #[error("{0} is not part of the deck")]
    UnknownCard(CardId),

    #[error("{id} is {value} of {suit:?} in the deck, but arrived as {found_value} of {found_suit:?}")]
    AlteredCard {
        id: CardId,
        value: u8,
        suit: Suit,
        found_value: u8,
        found_suit: Suit,
    },

    #[error("{0} appears more than once")]
    DuplicateCard(CardId),

    #[error("top card of column {0} is face-down")]
    HiddenTop(usize),

    #[error("{0} is face-up in the stock")]
    FaceUpInStock(CardId),
}
