//! The rule engine: game state, move history and read-only views.

#[allow(clippy::module_inception)]
mod game;
pub mod history;
pub mod view;

pub use game::{Game, MoveOutcome, Undone};
pub use history::{CompletedRun, DealRecord, Move, Relocation, Reveal};
pub use view::{CardView, GameView};
