//! Reversible move records.
//!
//! Every successful action pushes one `Move` onto the game history. A record
//! holds exactly what `undo` needs and nothing else:
//! - `Deal`: which card landed on which column
//! - `Relocate`: where a run came from and went, plus its side effects
//!
//! Side effects are stored by position ("column X, position P, card I was
//! flipped"), so undo never has to guess which card to turn back over.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardId};
use crate::core::config::{COLUMN_COUNT, RUN_LENGTH};

/// A card flipped face-up as a side effect of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reveal {
    pub column: usize,
    pub position: usize,
    pub card: CardId,
}

/// A King..Ace run removed from the destination after a move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedRun {
    /// The removed cards, King first. History owns them while removed.
    pub cards: Vec<Card>,

    /// Destination card exposed and flipped by the removal.
    pub revealed: Option<Reveal>,
}

/// A run moved from one column to another.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relocation {
    pub from: usize,
    /// Index in the source column where the run started.
    pub start: usize,
    pub to: usize,
    /// Ids of the moved cards, bottom to top.
    pub moved: SmallVec<[CardId; RUN_LENGTH]>,
    /// Source card exposed and flipped by the move.
    pub revealed: Option<Reveal>,
    pub completed: Option<CompletedRun>,
}

impl Relocation {
    /// Number of cards moved.
    #[must_use]
    pub fn count(&self) -> usize {
        self.moved.len()
    }
}

/// One card per column, in the order they were dealt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealRecord {
    pub dealt: SmallVec<[(usize, CardId); COLUMN_COUNT]>,
}

/// One executed, reversible action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    Deal(DealRecord),
    Relocate(Relocation),
}

impl Move {
    /// Is this a stock deal?
    #[must_use]
    pub fn is_deal(&self) -> bool {
        matches!(self, Move::Deal(_))
    }

    /// Cards held by this record (a completed run), if any.
    #[must_use]
    pub fn removed_cards(&self) -> &[Card] {
        match self {
            Move::Relocate(Relocation {
                completed: Some(run), ..
            }) => &run.cards,
            _ => &[],
        }
    }
}
