//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Marker};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... starting with X. While the game
/// is active the player to move follows from the history length; once it
/// is over the last mover stays current.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if let Some(first) = history.first() {
            if first.marker != Marker::X {
                return false;
            }
        }

        if history.windows(2).any(|pair| pair[0].marker == pair[1].marker) {
            return false;
        }

        let expected = if state.is_active() {
            if history.len() % 2 == 0 {
                Marker::X
            } else {
                Marker::O
            }
        } else {
            match history.last() {
                Some(last) => last.marker,
                None => return false,
            }
        };

        state.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
