//! Core engine types: RNG, configuration, rule constants and errors.
//!
//! Everything here is independent of where cards currently sit. The
//! containers live in `zones`, the rules in `game`.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameConfig, COLUMN_COUNT, DECK_SIZE, RUN_LENGTH, STANDARD_LAYOUT, TOTAL_RUNS};
pub use error::{DealError, MoveError, SetupError, UndoError};
pub use rng::GameRng;
