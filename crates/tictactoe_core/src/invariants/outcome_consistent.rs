//! Outcome consistency: the recorded result matches the board.

use super::super::rules;
use super::super::{GameState, Outcome};
use super::Invariant;

/// Invariant: outcome, activity and winning line agree with the board.
///
/// - the recorded outcome equals `evaluate_outcome(board)`
/// - the game is active iff the outcome is `InProgress`
/// - a winning line is recorded iff the outcome is a win, and the line is
///   held by the winner
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let outcome = state.outcome();

        if outcome != rules::evaluate_outcome(state.board()) {
            return false;
        }

        if state.is_active() != (outcome == Outcome::InProgress) {
            return false;
        }

        match (outcome.winner(), state.winning_line()) {
            (Some(winner), Some(line)) => line
                .iter()
                .all(|pos| state.board().get(*pos).marker() == Some(winner)),
            (None, None) => true,
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Outcome, activity and winning line agree with the board"
    }
}
