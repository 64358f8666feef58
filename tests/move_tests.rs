//! Move validation and completed-run removal.
//!
//! Positions are built with `common::arrange`, so each test spells out
//! exactly the columns it cares about.

mod common;

use common::{arrange, board, down, faces, run, up};
use spider_two_suit::{MoveError, Suit};

use Suit::{Hearts, Spades};

#[test]
fn test_single_card_same_suit() {
    let mut game = arrange(vec![
        vec![down(5, Hearts), up(7, Spades)],
        vec![down(2, Hearts), up(8, Spades)],
    ]);
    let hidden = game.column(0).unwrap().cards()[0].id;

    let outcome = game.try_move(0, 1, 1).unwrap();

    assert_eq!(outcome.count, 1);
    assert_eq!(outcome.revealed, Some(hidden));
    assert!(!outcome.completed_run);
    assert_eq!(faces(&game, 1), vec![down(2, Hearts), up(8, Spades), up(7, Spades)]);
    assert_eq!(faces(&game, 0), vec![up(5, Hearts)]);
    assert_eq!(game.history_len(), 1);
}

#[test]
fn test_single_card_cross_suit_is_allowed() {
    let mut game = arrange(vec![vec![up(7, Spades)], vec![up(8, Hearts)]]);

    assert!(game.move_run(0, 0, 1));
    assert_eq!(faces(&game, 1), vec![up(8, Hearts), up(7, Spades)]);
    assert!(game.column(0).unwrap().is_empty());
}

#[test]
fn test_wrong_rank_is_rejected() {
    let mut game = arrange(vec![vec![up(7, Spades)], vec![up(9, Hearts)]]);
    let before = board(&game);

    assert_eq!(
        game.try_move(0, 0, 1),
        Err(MoveError::Rejected { base: 7, top: 9 })
    );
    assert!(!game.move_run(0, 0, 1));
    assert_eq!(board(&game), before);
}

#[test]
fn test_multi_card_run_moves_together() {
    let mut game = arrange(vec![
        vec![down(3, Hearts), up(9, Hearts), up(8, Hearts)],
        vec![up(10, Spades)],
    ]);

    let outcome = game.try_move(0, 1, 1).unwrap();

    assert_eq!(outcome.count, 2);
    assert_eq!(
        faces(&game, 1),
        vec![up(10, Spades), up(9, Hearts), up(8, Hearts)]
    );
    assert_eq!(faces(&game, 0), vec![up(3, Hearts)]);
}

#[test]
fn test_mixed_suit_run_is_not_movable() {
    let mut game = arrange(vec![
        vec![up(8, Spades), up(7, Hearts)],
        vec![up(9, Spades)],
        vec![up(8, Hearts)],
    ]);
    let before = board(&game);

    assert_eq!(
        game.try_move(0, 0, 1),
        Err(MoveError::NotMovable { column: 0, index: 0 })
    );
    assert_eq!(board(&game), before);

    // The top card alone still moves
    assert!(game.move_run(0, 1, 2));
    assert_eq!(faces(&game, 2), vec![up(8, Hearts), up(7, Hearts)]);
}

#[test]
fn test_face_down_card_is_not_movable() {
    let mut game = arrange(vec![
        vec![down(8, Spades), up(7, Spades)],
        vec![up(9, Hearts)],
    ]);

    assert!(!game.can_move(0, 0, 1));
    assert!(!game.move_run(0, 0, 1));
}

#[test]
fn test_empty_column_accepts_anything() {
    let mut game = arrange(vec![vec![up(4, Hearts), up(11, Spades)], vec![]]);

    assert!(game.move_run(0, 1, 1));
    assert_eq!(faces(&game, 1), vec![up(11, Spades)]);
}

#[test]
fn test_bad_indices_are_rejected() {
    let mut game = arrange(vec![vec![up(7, Spades)], vec![up(8, Spades)]]);
    let before = board(&game);

    assert_eq!(game.try_move(0, 0, 0), Err(MoveError::SameColumn(0)));
    assert_eq!(game.try_move(10, 0, 1), Err(MoveError::NoSuchColumn(10)));
    assert_eq!(game.try_move(0, 0, 42), Err(MoveError::NoSuchColumn(42)));
    assert_eq!(
        game.try_move(0, 5, 1),
        Err(MoveError::NotMovable { column: 0, index: 5 })
    );
    assert_eq!(board(&game), before);
}

#[test]
fn test_can_move_agrees_and_does_not_mutate() {
    let game = arrange(vec![
        vec![up(7, Spades)],
        vec![up(8, Hearts)],
        vec![up(9, Hearts)],
    ]);
    let before = board(&game);

    assert!(game.can_move(0, 0, 1));
    assert!(!game.can_move(0, 0, 2));
    assert!(game.can_move(0, 0, 5)); // empty column
    assert_eq!(board(&game), before);
}

#[test]
fn test_completed_run_is_removed() {
    let mut king_to_two = vec![down(5, Hearts)];
    king_to_two.extend(run(13, 2, Spades));
    let mut game = arrange(vec![king_to_two, vec![down(9, Hearts), up(1, Spades)]]);

    let outcome = game.try_move(1, 1, 0).unwrap();

    assert!(outcome.completed_run);
    assert_eq!(game.removed_sequences(), 1);
    assert_eq!(faces(&game, 0), vec![up(5, Hearts)]);
    assert_eq!(faces(&game, 1), vec![up(9, Hearts)]);
    assert_eq!(game.last_move().unwrap().removed_cards().len(), 13);
    assert!(game.check_conservation());
}

#[test]
fn test_completed_run_from_multi_card_move() {
    let mut tail = vec![down(1, Spades)];
    tail.extend(run(6, 1, Hearts));
    let mut game = arrange(vec![run(13, 7, Hearts), tail]);

    let outcome = game.try_move(1, 1, 0).unwrap();

    assert_eq!(outcome.count, 6);
    assert!(outcome.completed_run);
    assert!(game.column(0).unwrap().is_empty());
    assert_eq!(faces(&game, 1), vec![up(1, Spades)]);
}

#[test]
fn test_same_suit_out_of_order_is_not_removed() {
    let mut column = vec![up(12, Spades), up(13, Spades)];
    column.extend(run(12, 3, Spades));
    let mut game = arrange(vec![column, vec![up(2, Spades)]]);

    assert!(game.move_run(1, 0, 0));
    assert_eq!(game.removed_sequences(), 0);
    assert_eq!(game.column(0).unwrap().len(), 13);
}

#[test]
fn test_mixed_suits_are_not_removed() {
    let mut column = vec![up(13, Hearts)];
    column.extend(run(12, 2, Spades));
    let mut game = arrange(vec![column, vec![up(1, Spades)]]);

    assert!(game.move_run(1, 0, 0));
    assert_eq!(game.removed_sequences(), 0);
    assert_eq!(game.column(0).unwrap().len(), 13);
}

#[test]
fn test_hidden_king_blocks_removal() {
    let mut column = vec![down(13, Spades)];
    column.extend(run(12, 2, Spades));
    let mut game = arrange(vec![column, vec![up(1, Spades)]]);

    assert!(game.move_run(1, 0, 0));
    assert_eq!(game.removed_sequences(), 0);
    assert_eq!(game.column(0).unwrap().len(), 13);
}

#[test]
fn test_playing_out_every_run_wins() {
    let mut layout = Vec::new();
    for _ in 0..4 {
        layout.push(run(13, 2, Spades));
    }
    for _ in 0..4 {
        layout.push(run(13, 2, Hearts));
    }
    layout.push(vec![up(1, Spades); 4]);
    layout.push(vec![up(1, Hearts); 4]);
    let mut game = arrange(layout);
    assert_eq!(game.stock_len(), 0);

    for i in 0..4 {
        assert!(game.move_run(8, 3 - i, i));
        assert!(game.move_run(9, 3 - i, 4 + i));
        assert_eq!(game.removed_sequences(), 2 * (i + 1));
    }

    assert!(game.is_won());
    assert_eq!(game.removed_sequences(), 8);
    assert!(game.columns().iter().all(|c| c.is_empty()));
    assert!(game.check_conservation());
    assert!(!game.deal());

    // Nothing left to move, so the count can never pass eight
    assert!(!game.move_run(0, 0, 1));
    assert_eq!(game.removed_sequences(), 8);
}
