//! Win detection logic for tic-tac-toe.

use super::super::{Board, Marker, Position, Square};
use tracing::instrument;

/// Three positions that win when held by one marker.
pub type WinLine = [Position; 3];

/// The 8 winning lines, scanned in this order.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line and the marker holding it.
#[instrument(skip(board), fields(board = %board))]
pub fn winning_line(board: &Board) -> Option<(Marker, WinLine)> {
    WIN_LINES.into_iter().find_map(|line| line_owner(board, line).map(|m| (m, line)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(marker)` if a marker has three in a row, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Marker> {
    WIN_LINES.into_iter().find_map(|line| line_owner(board, line))
}

fn line_owner(board: &Board, [a, b, c]: WinLine) -> Option<Marker> {
    match board.get(a) {
        Square::Occupied(marker) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some(marker)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Marker::X));
        assert_eq!(
            winning_line(&board),
            Some((
                Marker::X,
                [Position::TopLeft, Position::TopCenter, Position::TopRight]
            ))
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "XXO/.O./O.X".parse().unwrap();
        assert_eq!(
            winning_line(&board),
            Some((
                Marker::O,
                [Position::TopRight, Position::Center, Position::BottomLeft]
            ))
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX./.O./...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XOX/.../...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }
}
