//! Shared fixtures for integration tests.
//!
//! - `init_logging`: idempotent tracing subscriber for captured test output
//! - `arrange`: build a game from a hand-written position
//! - `board`: everything `undo` must restore, in comparable form

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use spider_two_suit::{create_two_suit_double_deck, Card, Column, Game, Stock, Suit, COLUMN_COUNT};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize structured logging for tests.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// A card to place: value, suit, face-up.
pub type Slot = (u8, Suit, bool);

pub fn up(value: u8, suit: Suit) -> Slot {
    (value, suit, true)
}

pub fn down(value: u8, suit: Suit) -> Slot {
    (value, suit, false)
}

/// Face-up cards from `high` down to `low` in one suit.
pub fn run(high: u8, low: u8, suit: Suit) -> Vec<Slot> {
    (low..=high).rev().map(|v| up(v, suit)).collect()
}

/// Build a game whose columns hold exactly `layout` (bottom first).
///
/// Cards are drawn from a fresh deck; missing columns are empty and every
/// unused card goes to the stock face-down.
pub fn arrange(layout: Vec<Vec<Slot>>) -> Game {
    init_logging();
    assert!(layout.len() <= COLUMN_COUNT, "too many columns");

    let mut pool = create_two_suit_double_deck();
    let mut columns: Vec<Vec<Card>> = layout
        .into_iter()
        .map(|slots| {
            slots
                .into_iter()
                .map(|(value, suit, face_up)| {
                    let at = pool
                        .iter()
                        .position(|c| c.value == value && c.suit == suit)
                        .unwrap_or_else(|| panic!("no copies of {value} {suit:?} left"));
                    let mut card = pool.remove(at);
                    card.face_up = face_up;
                    card
                })
                .collect()
        })
        .collect();
    columns.resize_with(COLUMN_COUNT, Vec::new);

    Game::from_tableau(columns, pool).expect("arranged position should be valid")
}

/// State that undo must restore exactly.
pub fn board(game: &Game) -> (Vec<Column>, Stock, usize, usize) {
    (
        game.columns().to_vec(),
        game.stock().clone(),
        game.removed_sequences(),
        game.history_len(),
    )
}

/// (value, suit, face_up) of every card in a column.
pub fn faces(game: &Game, column: usize) -> Vec<Slot> {
    game.column(column)
        .map(|c| c.cards().iter().map(|card| (card.value, card.suit, card.face_up)).collect())
        .unwrap_or_default()
}
