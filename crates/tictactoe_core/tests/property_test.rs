//! Property tests over arbitrary boards and move sequences.

use proptest::prelude::*;
use tictactoe_core::invariants::{EngineInvariants, InvariantSet};
use tictactoe_core::rules::{check_winner, is_full};
use tictactoe_core::{
    Board, GameEngine, Marker, Outcome, Square, evaluate_outcome, find_best_move, winning_line,
};

fn square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Marker::X)),
        Just(Square::Occupied(Marker::O)),
    ]
}

fn board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(square()).prop_map(Board::from_squares)
}

proptest! {
    #[test]
    fn outcome_is_exactly_one_classification(board in board()) {
        match evaluate_outcome(&board) {
            Outcome::Win(marker) => {
                prop_assert_eq!(winning_line(&board).map(|(m, _)| m), Some(marker));
            }
            Outcome::Draw => {
                prop_assert!(is_full(&board));
                prop_assert_eq!(check_winner(&board), None);
            }
            Outcome::InProgress => {
                prop_assert!(!is_full(&board));
                prop_assert_eq!(check_winner(&board), None);
            }
        }
    }

    #[test]
    fn rejected_moves_never_change_state(indices in proptest::collection::vec(0usize..12, 0..20)) {
        let mut engine = GameEngine::new();
        for index in indices {
            let before = engine.state().clone();
            match engine.apply_move(index) {
                Ok(outcome) => {
                    prop_assert_eq!(outcome, engine.outcome());
                    prop_assert_eq!(engine.history().len(), before.history().len() + 1);
                }
                Err(_) => prop_assert_eq!(engine.state(), &before),
            }
            prop_assert!(EngineInvariants::check_all(engine.state()).is_ok());
            prop_assert_eq!(engine.is_active(), engine.outcome() == Outcome::InProgress);
        }
    }

    #[test]
    fn legal_play_never_shows_two_winners(indices in proptest::collection::vec(0usize..9, 0..12)) {
        let mut engine = GameEngine::new();
        for index in indices {
            let _ = engine.apply_move(index);
        }
        let winners: Vec<_> = [Marker::X, Marker::O]
            .into_iter()
            .filter(|m| {
                tictactoe_core::WIN_LINES
                    .iter()
                    .any(|line| line.iter().all(|p| engine.board().get(*p) == Square::Occupied(*m)))
            })
            .collect();
        prop_assert!(winners.len() <= 1);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn best_move_is_an_empty_square(board in board()) {
        let outcome = evaluate_outcome(&board);
        let best = find_best_move(&board, Marker::O);
        if outcome.is_terminal() {
            prop_assert_eq!(best, None);
        } else {
            let pos = best.expect("in-progress board has an empty square");
            prop_assert!(board.is_empty(pos));
        }
    }
}
