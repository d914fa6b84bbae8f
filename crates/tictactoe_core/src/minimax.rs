//! Exhaustive minimax move selection.
//!
//! The search walks the full game tree below the given board. Leaves are
//! scored from the AI's point of view with [`WIN_SCORE`], [`LOSS_SCORE`]
//! and [`DRAW_SCORE`]; depth does not affect the score, so a slow win is
//! worth as much as a fast one. Candidates are tried in ascending index
//! order and ties go to the first one.

use super::rules::evaluate_outcome;
use super::{Board, Marker, Outcome, Position, Square};
use tracing::{debug, instrument};

/// Score of a board the AI has won.
pub const WIN_SCORE: i32 = 10;
/// Score of a board the AI's opponent has won.
pub const LOSS_SCORE: i32 = -10;
/// Score of a drawn board.
pub const DRAW_SCORE: i32 = 0;

/// Minimax move selector playing `ai`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    ai: Marker,
}

impl Minimax {
    /// Creates a selector for the given AI marker.
    pub fn new(ai: Marker) -> Self {
        Self { ai }
    }

    /// Scores a classified board, `None` while the game is in progress.
    pub fn leaf_score(&self, outcome: Outcome) -> Option<i32> {
        match outcome {
            Outcome::InProgress => None,
            Outcome::Draw => Some(DRAW_SCORE),
            Outcome::Win(winner) if winner == self.ai => Some(WIN_SCORE),
            Outcome::Win(_) => Some(LOSS_SCORE),
        }
    }

    /// Returns the best cell for the AI to play on `board`.
    ///
    /// Assumes the AI is to move. Returns `None` when the board is already
    /// won or full.
    #[instrument(skip(self, board), fields(ai = %self.ai, board = %board))]
    pub fn best_move(&self, board: &Board) -> Option<Position> {
        let mut best: Option<(Position, i32)> = None;
        for (pos, score) in self.evaluate_moves(board) {
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((pos, score)),
            }
        }

        if let Some((pos, score)) = best {
            debug!(position = %pos, score, "Selected move");
        }
        best.map(|(pos, _)| pos)
    }

    /// Scores every empty cell as an AI move, in ascending index order.
    ///
    /// Each score assumes optimal play from both sides afterwards. Empty
    /// when the board is already won or full.
    #[instrument(skip(self, board), fields(ai = %self.ai))]
    pub fn evaluate_moves(&self, board: &Board) -> Vec<(Position, i32)> {
        if evaluate_outcome(board).is_terminal() {
            return Vec::new();
        }

        let mut scratch = board.clone();
        let mut nodes = 0u64;
        let scores: Vec<_> = board
            .empty_positions()
            .map(|pos| {
                scratch.set(pos, Square::Occupied(self.ai));
                let score = self.minimax(&mut scratch, self.ai.opponent(), &mut nodes);
                scratch.set(pos, Square::Empty);
                (pos, score)
            })
            .collect();

        debug!(nodes, candidates = scores.len(), "Search complete");
        scores
    }

    /// Value of `board` with `mover` to play: the AI maximizes, the
    /// opponent minimizes. Every placement is undone before returning.
    fn minimax(&self, board: &mut Board, mover: Marker, nodes: &mut u64) -> i32 {
        *nodes += 1;

        if let Some(score) = self.leaf_score(evaluate_outcome(board)) {
            return score;
        }

        let maximizing = mover == self.ai;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            board.set(pos, Square::Occupied(mover));
            let score = self.minimax(board, mover.opponent(), nodes);
            board.set(pos, Square::Empty);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}

/// Returns the optimal cell for `ai_marker` to play on `board`.
///
/// See [`Minimax::best_move`].
pub fn find_best_move(board: &Board, ai_marker: Marker) -> Option<Position> {
    Minimax::new(ai_marker).best_move(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_prefers_first_index() {
        let board = Board::new();
        let scores = Minimax::new(Marker::O).evaluate_moves(&board);
        assert_eq!(scores.len(), 9);
        assert!(scores.iter().all(|(_, score)| *score == DRAW_SCORE));
        assert_eq!(find_best_move(&board, Marker::O), Some(Position::TopLeft));
    }

    #[test]
    fn test_takes_immediate_win() {
        let board: Board = "OO./XX./X..".parse().unwrap();
        assert_eq!(find_best_move(&board, Marker::O), Some(Position::TopRight));
    }

    #[test]
    fn test_blocks_open_line() {
        let board: Board = "XX./.O./...".parse().unwrap();
        assert_eq!(find_best_move(&board, Marker::O), Some(Position::TopRight));
    }

    #[test]
    fn test_lost_position_takes_first_empty_cell() {
        // X holds two open lines through the bottom-right corner
        let board: Board = "O.X/.O./X.X".parse().unwrap();
        let scores = Minimax::new(Marker::O).evaluate_moves(&board);
        assert!(scores.iter().all(|(_, score)| *score == LOSS_SCORE));
        assert_eq!(find_best_move(&board, Marker::O), Some(Position::TopCenter));
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let won: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(find_best_move(&won, Marker::O), None);

        let drawn: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(find_best_move(&drawn, Marker::O), None);
    }

    #[test]
    fn test_scores_follow_ai_marker() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let outcome = evaluate_outcome(&board);
        assert_eq!(Minimax::new(Marker::X).leaf_score(outcome), Some(WIN_SCORE));
        assert_eq!(Minimax::new(Marker::O).leaf_score(outcome), Some(LOSS_SCORE));
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let board: Board = "X../.O./..X".parse().unwrap();
        let before = board.clone();
        let _ = find_best_move(&board, Marker::O);
        assert_eq!(board, before);
    }
}
