//! The two-suit Spider rule engine.

use im::Vector;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::{debug, error, info, trace};

use super::history::{CompletedRun, DealRecord, Move, Relocation, Reveal};
use super::view::{CardView, GameView};
use crate::cards::{create_two_suit_double_deck, Card, CardId};
use crate::core::{
    DealError, GameConfig, GameRng, MoveError, SetupError, UndoError, COLUMN_COUNT, DECK_SIZE,
    RUN_LENGTH, STANDARD_LAYOUT, TOTAL_RUNS,
};
use crate::zones::{Column, Stock};

/// What a successful move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Cards moved.
    pub count: usize,
    /// Source card flipped face-up by the move.
    pub revealed: Option<CardId>,
    /// A King..Ace run was removed from the destination.
    pub completed_run: bool,
}

/// What a successful undo reversed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Undone {
    Deal,
    Relocation {
        from: usize,
        to: usize,
        count: usize,
        restored_run: bool,
    },
}

/// A game of two-suit Spider.
///
/// Owns the ten columns, the stock and the undo history. All mutation goes
/// through [`move_run`](Game::move_run), [`deal`](Game::deal),
/// [`undo`](Game::undo) and [`reset`](Game::reset); each either applies
/// completely or leaves the game untouched.
///
/// ## Example
///
/// ```
/// use spider_two_suit::Game;
///
/// let mut game = Game::new(Some(42));
/// assert_eq!(game.stock_len(), 50);
///
/// assert!(game.deal());
/// assert_eq!(game.stock_len(), 40);
///
/// assert!(game.undo());
/// assert_eq!(game.stock_len(), 50);
/// assert!(!game.undo());
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    /// Shuffle seed; `None` for arranged positions.
    seed: Option<u64>,
    columns: Vec<Column>,
    stock: Stock,
    /// Persistent so cloning a game (e.g. to preview a move) is O(1).
    history: Vector<Move>,
    removed_sequences: usize,
}

impl Game {
    // === Construction ===

    /// Shuffle and deal a new game with the standard layout.
    ///
    /// `None` draws a seed from entropy; [`seed`](Game::seed) reports it.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        Self::deal_new(GameRng::from_optional(seed), &STANDARD_LAYOUT)
    }

    /// Shuffle and deal a new game from a config.
    pub fn with_config(config: &GameConfig) -> Result<Self, SetupError> {
        config.validate()?;
        Ok(Self::deal_new(
            GameRng::from_optional(config.seed),
            &config.initial_layout,
        ))
    }

    /// Build a game from an arranged position.
    ///
    /// `columns` are bottom-to-top; the last stock card is dealt first.
    /// Together they must hold all 104 deck cards exactly once, each with
    /// the value and suit the deck gives its id. Every
    /// non-empty column must show its top card, and the stock must be
    /// face-down. History starts empty.
    pub fn from_tableau(columns: Vec<Vec<Card>>, stock: Vec<Card>) -> Result<Self, SetupError> {
        if columns.len() != COLUMN_COUNT {
            return Err(SetupError::ColumnCount {
                expected: COLUMN_COUNT,
                found: columns.len(),
            });
        }

        let found = columns.iter().map(Vec::len).sum::<usize>() + stock.len();
        if found != DECK_SIZE {
            return Err(SetupError::CardCount {
                expected: DECK_SIZE,
                found,
            });
        }

        let deck = create_two_suit_double_deck();
        let mut seen = FxHashSet::default();
        for card in columns.iter().flatten().chain(&stock) {
            let original = deck
                .get(usize::from(card.id.raw()))
                .ok_or(SetupError::UnknownCard(card.id))?;
            if (original.value, original.suit) != (card.value, card.suit) {
                return Err(SetupError::AlteredCard {
                    id: card.id,
                    value: original.value,
                    suit: original.suit,
                    found_value: card.value,
                    found_suit: card.suit,
                });
            }
            if !seen.insert(card.id) {
                return Err(SetupError::DuplicateCard(card.id));
            }
        }

        if let Some(column) = columns
            .iter()
            .position(|cards| cards.last().is_some_and(|top| !top.face_up))
        {
            return Err(SetupError::HiddenTop(column));
        }
        if let Some(card) = stock.iter().find(|card| card.face_up) {
            return Err(SetupError::FaceUpInStock(card.id));
        }

        Ok(Self {
            seed: None,
            columns: columns.into_iter().map(Column::from_cards).collect(),
            stock: Stock::from_cards(stock),
            history: Vector::new(),
            removed_sequences: 0,
        })
    }

    fn deal_new(mut rng: GameRng, layout: &[usize]) -> Self {
        let mut cards = create_two_suit_double_deck();
        rng.shuffle(&mut cards);

        let mut remaining = cards.into_iter();
        let columns: Vec<Column> = layout
            .iter()
            .map(|&size| {
                let mut column = Column::from_cards(remaining.by_ref().take(size).collect());
                column.reveal_top_if_needed();
                column
            })
            .collect();
        let stock = Stock::from_cards(remaining.collect());

        info!(seed = rng.seed(), stock = stock.len(), "new game dealt");

        let game = Self {
            seed: Some(rng.seed()),
            columns,
            stock,
            history: Vector::new(),
            removed_sequences: 0,
        };
        debug_assert!(game.check_conservation(), "fresh deal lost cards");
        game
    }

    /// Replace this game with a freshly shuffled one.
    ///
    /// Equivalent to `*game = Game::new(seed)`.
    pub fn reset(&mut self, seed: Option<u64>) {
        *self = Self::new(seed);
    }

    // === Queries ===

    /// The seed that produced this deal, if it was shuffled.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    #[must_use]
    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    #[must_use]
    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    /// Completed runs removed so far.
    #[must_use]
    pub fn removed_sequences(&self) -> usize {
        self.removed_sequences
    }

    /// Moves that can still be undone.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Recorded moves, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &Move> + '_ {
        self.history.iter()
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// All eight runs have been completed.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.removed_sequences == TOTAL_RUNS
    }

    /// Read-only view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> GameView {
        GameView {
            columns: self
                .columns
                .iter()
                .map(|column| column.cards().iter().map(CardView::from).collect())
                .collect(),
            stock_remaining: self.stock.len(),
            removed_sequences: self.removed_sequences,
            history_len: self.history.len(),
        }
    }

    /// Every card id, wherever it is: columns, stock, then removed runs.
    pub fn card_ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.columns
            .iter()
            .flat_map(Column::cards)
            .chain(self.stock.cards())
            .chain(self.history.iter().flat_map(Move::removed_cards))
            .map(|card| card.id)
    }

    /// Every deck card is in exactly one place and the counts add up to 104.
    #[must_use]
    pub fn check_conservation(&self) -> bool {
        let on_board: usize = self.columns.iter().map(Column::len).sum();
        if on_board + self.stock.len() + RUN_LENGTH * self.removed_sequences != DECK_SIZE {
            return false;
        }

        let mut seen = FxHashSet::default();
        self.card_ids()
            .all(|id| usize::from(id.raw()) < DECK_SIZE && seen.insert(id))
            && seen.len() == DECK_SIZE
    }

    // === Moving runs ===

    /// Move the run starting at `start` in column `from` onto column `to`.
    ///
    /// Returns `false`, changing nothing, if the move is not legal.
    pub fn move_run(&mut self, from: usize, start: usize, to: usize) -> bool {
        match self.try_move(from, start, to) {
            Ok(_) => true,
            Err(reason) => {
                trace!(from, start, to, %reason, "move rejected");
                false
            }
        }
    }

    /// Would [`move_run`](Game::move_run) succeed?
    #[must_use]
    pub fn can_move(&self, from: usize, start: usize, to: usize) -> bool {
        self.validate_move(from, start, to).is_ok()
    }

    /// Move a run, reporting why it was rejected.
    pub fn try_move(&mut self, from: usize, start: usize, to: usize) -> Result<MoveOutcome, MoveError> {
        let count = self.validate_move(from, start, to)?;

        let run = self.columns[from].pop_n(count);
        let moved = run.iter().map(|card| card.id).collect();
        self.columns[to].push_sequence(run);
        let revealed = self.reveal_top(from);
        let completed = self.remove_completed_run(to);

        let outcome = MoveOutcome {
            count,
            revealed: revealed.map(|r| r.card),
            completed_run: completed.is_some(),
        };
        debug!(from, start, to, count, revealed = ?outcome.revealed, "run moved");

        self.history.push_back(Move::Relocate(Relocation {
            from,
            start,
            to,
            moved,
            revealed,
            completed,
        }));
        debug_assert!(self.check_conservation(), "move lost cards");
        Ok(outcome)
    }

    /// Returns the number of cards that would move.
    fn validate_move(&self, from: usize, start: usize, to: usize) -> Result<usize, MoveError> {
        let source = self.columns.get(from).ok_or(MoveError::NoSuchColumn(from))?;
        let dest = self.columns.get(to).ok_or(MoveError::NoSuchColumn(to))?;
        if from == to {
            return Err(MoveError::SameColumn(from));
        }

        let run = source
            .movable_subsequence_from(start)
            .ok_or(MoveError::NotMovable { column: from, index: start })?;

        // Rank adjacency only: any suit may go on any suit.
        if let Some(top) = dest.top() {
            if !run.base().is_one_below(top) {
                return Err(MoveError::Rejected {
                    base: run.base().value,
                    top: top.value,
                });
            }
        }

        Ok(run.size())
    }

    fn reveal_top(&mut self, column: usize) -> Option<Reveal> {
        let target = &mut self.columns[column];
        let card = target.reveal_top_if_needed()?;
        Some(Reveal {
            column,
            position: target.len() - 1,
            card,
        })
    }

    fn remove_completed_run(&mut self, column: usize) -> Option<CompletedRun> {
        self.columns[column].completed_run()?;

        let cards = self.columns[column].pop_n(RUN_LENGTH);
        self.removed_sequences += 1;
        let revealed = self.reveal_top(column);

        info!(
            column,
            suit = ?cards.first().map(|c| c.suit),
            removed = self.removed_sequences,
            "run completed"
        );
        if self.is_won() {
            info!("all runs completed");
        }

        Some(CompletedRun { cards, revealed })
    }

    // === Dealing ===

    /// Deal one card face-up onto every column.
    ///
    /// Returns `false`, changing nothing, if a column is empty or the stock
    /// holds fewer than ten cards.
    pub fn deal(&mut self) -> bool {
        match self.try_deal() {
            Ok(()) => true,
            Err(reason) => {
                trace!(%reason, "deal rejected");
                false
            }
        }
    }

    #[must_use]
    pub fn can_deal(&self) -> bool {
        self.check_deal().is_ok()
    }

    /// Deal from the stock, reporting why it was rejected.
    pub fn try_deal(&mut self) -> Result<(), DealError> {
        self.check_deal()?;

        let batch = self.stock.take_batch(COLUMN_COUNT).ok_or(DealError::StockExhausted {
            remaining: self.stock.len(),
            needed: COLUMN_COUNT,
        })?;

        let mut dealt = SmallVec::new();
        for (index, (column, card)) in self.columns.iter_mut().zip(batch).enumerate() {
            dealt.push((index, card.id));
            column.push(card.turned_up());
        }

        debug!(stock = self.stock.len(), "dealt from stock");
        self.history.push_back(Move::Deal(DealRecord { dealt }));
        debug_assert!(self.check_conservation(), "deal lost cards");
        Ok(())
    }

    fn check_deal(&self) -> Result<(), DealError> {
        if let Some(column) = self.columns.iter().position(Column::is_empty) {
            return Err(DealError::EmptyColumn(column));
        }
        if !self.stock.can_deal() {
            return Err(DealError::StockExhausted {
                remaining: self.stock.len(),
                needed: COLUMN_COUNT,
            });
        }
        Ok(())
    }

    // === Undo ===

    /// Reverse the most recent move or deal.
    ///
    /// Returns `false` if there is nothing to undo.
    ///
    /// # Panics
    ///
    /// Panics if the board no longer matches the recorded move. That can only
    /// happen after card conservation has already been broken.
    pub fn undo(&mut self) -> bool {
        match self.try_undo() {
            Ok(_) => true,
            Err(UndoError::EmptyHistory) => false,
            Err(corruption) => {
                error!(%corruption, "board out of step with history");
                panic!("{}", corruption);
            }
        }
    }

    /// Reverse the most recent move or deal, reporting failures.
    ///
    /// Every expected card is checked before anything changes, so an error
    /// leaves the game (history included) exactly as it was.
    pub fn try_undo(&mut self) -> Result<Undone, UndoError> {
        let record = self.history.pop_back().ok_or(UndoError::EmptyHistory)?;
        if let Err(corruption) = self.check_reversible(&record) {
            self.history.push_back(record);
            return Err(corruption);
        }

        let undone = match record {
            Move::Deal(deal) => {
                self.undo_deal(&deal);
                Undone::Deal
            }
            Move::Relocate(relocation) => {
                let undone = Undone::Relocation {
                    from: relocation.from,
                    to: relocation.to,
                    count: relocation.count(),
                    restored_run: relocation.completed.is_some(),
                };
                self.undo_relocation(relocation);
                undone
            }
        };

        debug!(?undone, history = self.history.len(), "undid move");
        debug_assert!(self.check_conservation(), "undo lost cards");
        Ok(undone)
    }

    fn check_reversible(&self, record: &Move) -> Result<(), UndoError> {
        match record {
            Move::Deal(deal) => deal.dealt.iter().try_for_each(|&(column, card)| {
                let top = self.columns.get(column).map_or(0, |c| c.len().saturating_sub(1));
                self.expect_card(column, top, card)
            }),
            Move::Relocate(relocation) => {
                if let Some(&missing) = [relocation.from, relocation.to]
                    .iter()
                    .find(|&&column| column >= self.columns.len())
                {
                    return Err(UndoError::NoSuchColumn(missing));
                }
                if let Some(reveal) = relocation.revealed {
                    self.expect_card(reveal.column, reveal.position, reveal.card)?;
                }

                // A completed run took the moved cards with it.
                if let Some(run) = &relocation.completed {
                    if let Some(reveal) = run.revealed {
                        self.expect_card(reveal.column, reveal.position, reveal.card)?;
                    }
                    let held = run.cards.len().saturating_sub(relocation.count());
                    let tail = run.cards[held..].iter().map(|card| card.id);
                    if !tail.eq(relocation.moved.iter().copied()) {
                        return Err(UndoError::RunMismatch(relocation.to));
                    }
                    return Ok(());
                }

                let found = self.columns.get(relocation.to).map_or(0, Column::len);
                let Some(bottom) = found.checked_sub(relocation.count()) else {
                    return Err(UndoError::MissingCards {
                        column: relocation.to,
                        needed: relocation.count(),
                        found,
                    });
                };
                relocation
                    .moved
                    .iter()
                    .enumerate()
                    .try_for_each(|(offset, &card)| {
                        self.expect_card(relocation.to, bottom + offset, card)
                    })
            }
        }
    }

    fn expect_card(&self, column: usize, position: usize, expected: CardId) -> Result<(), UndoError> {
        let found = self
            .columns
            .get(column)
            .and_then(|c| c.get(position))
            .map(|card| card.id);
        if found == Some(expected) {
            Ok(())
        } else {
            Err(UndoError::HistoryCorrupted {
                column,
                position,
                expected,
                found,
            })
        }
    }

    fn undo_deal(&mut self, deal: &DealRecord) {
        for &(column, _) in deal.dealt.iter().rev() {
            if let Some(card) = self.columns[column].pop() {
                self.stock.put_back(card);
            }
        }
    }

    fn undo_relocation(&mut self, relocation: Relocation) {
        let count = relocation.count();
        let Relocation {
            from,
            to,
            revealed,
            completed,
            ..
        } = relocation;

        // Removal was the last effect applied, so it is reversed first.
        if let Some(run) = completed {
            if let Some(reveal) = run.revealed {
                self.columns[to].conceal(reveal.position);
            }
            self.columns[to].push_sequence(run.cards);
            self.removed_sequences -= 1;
        }

        let cards = self.columns[to].pop_n(count);
        if let Some(reveal) = revealed {
            self.columns[from].conceal(reveal.position);
        }
        self.columns[from].push_sequence(cards);
    }
}
