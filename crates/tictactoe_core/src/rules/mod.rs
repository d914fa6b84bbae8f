//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Both the engine and the minimax search
//! classify boards through [`evaluate_outcome`], so the two never disagree
//! about when a game has ended.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WIN_LINES, WinLine, check_winner, winning_line};

use super::{Board, Outcome};

/// Classifies a board.
///
/// Scans the win lines for three equal markers, then checks for a full
/// board. Has no side effects.
pub fn evaluate_outcome(board: &Board) -> Outcome {
    if let Some(marker) = check_winner(board) {
        Outcome::Win(marker)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
