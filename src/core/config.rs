//! Game configuration and fixed rule constants.
//!
//! The rules of two-suit Spider are fixed: ten columns, a 104-card deck and
//! 13-card runs. What a caller may configure is the seed and how many cards
//! each column receives before the rest goes to the stock.

use serde::{Deserialize, Serialize};

use super::error::SetupError;

/// Number of tableau columns.
pub const COLUMN_COUNT: usize = 10;

/// Number of cards in the two-suit double deck.
pub const DECK_SIZE: usize = 104;

/// Length of a completed King..Ace run.
pub const RUN_LENGTH: usize = 13;

/// Completed runs needed to win (every card removed).
pub const TOTAL_RUNS: usize = DECK_SIZE / RUN_LENGTH;

/// Cards per column in a standard opening deal.
pub const STANDARD_LAYOUT: [usize; COLUMN_COUNT] = [6, 6, 6, 6, 5, 5, 5, 5, 5, 5];

/// Start-up configuration for a game.
///
/// ```
/// use spider_two_suit::core::GameConfig;
///
/// let config = GameConfig::default().with_seed(7);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.tableau_cards(), 54);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Shuffle seed. `None` draws one from entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Cards dealt into each column at start; only the last one is face-up.
    pub initial_layout: Vec<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            initial_layout: STANDARD_LAYOUT.to_vec(),
        }
    }
}

impl GameConfig {
    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the opening layout.
    #[must_use]
    pub fn with_layout(mut self, layout: impl Into<Vec<usize>>) -> Self {
        self.initial_layout = layout.into();
        self
    }

    /// Total cards placed on the tableau at start.
    #[must_use]
    pub fn tableau_cards(&self) -> usize {
        self.initial_layout.iter().sum()
    }

    /// Check that the layout can be dealt from one deck.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.initial_layout.len() != COLUMN_COUNT {
            return Err(SetupError::ColumnCount {
                expected: COLUMN_COUNT,
                found: self.initial_layout.len(),
            });
        }
        if let Some(column) = self.initial_layout.iter().position(|&n| n == 0) {
            return Err(SetupError::EmptyStartingColumn(column));
        }
        let total = self.tableau_cards();
        if total > DECK_SIZE {
            return Err(SetupError::LayoutTooLarge { requested: total, available: DECK_SIZE });
        }
        Ok(())
    }
}
