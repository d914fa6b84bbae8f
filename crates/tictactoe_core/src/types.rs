//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A player's symbol.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Marker {
    /// Marker X (always moves first).
    X,
    /// Marker O (moves second).
    O,
}

impl Marker {
    /// Returns the opposing marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a marker.
    Occupied(Marker),
}

impl Square {
    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Square::Empty => None,
            Square::Occupied(marker) => Some(marker),
        }
    }

    fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Marker::X) => 'X',
            Square::Occupied(Marker::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells are stored row-major, so index 0 is the top-left corner and
/// index 8 the bottom-right one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from nine squares in row-major order.
    ///
    /// The result is not checked for reachability, so it may hold
    /// positions no legal game produces. Useful for evaluating arbitrary
    /// boards and for search from a given position.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Returns the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Iterates over the empty positions in ascending index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|pos| self.is_empty(*pos))
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The text did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),

    /// A cell character was not recognised.
    #[display("Invalid cell character {:?}", _0)]
    InvalidCell(char),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order.
    ///
    /// `X` and `O` (either case) are markers; `.`, `_` and `-` are empty.
    /// Whitespace, `|` and `/` are ignored so rows may be separated.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .map(|c| match c {
                'X' | 'x' => Ok(Square::Occupied(Marker::X)),
                'O' | 'o' => Ok(Square::Occupied(Marker::O)),
                '.' | '_' | '-' => Ok(Square::Empty),
                other => Err(BoardParseError::InvalidCell(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let squares: [Square; 9] = cells
            .try_into()
            .map_err(|cells: Vec<Square>| BoardParseError::WrongLength(cells.len()))?;
        Ok(Self::from_squares(squares))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, square) in self.squares.iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                f.write_str("/")?;
            }
            write!(f, "{}", square.symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_positions().count(), 9);
        assert!(board.squares().iter().all(|s| s.marker().is_none()));
    }

    #[test]
    fn test_parse_board() {
        let board: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Marker::X));
        assert_eq!(board.get(Position::MiddleLeft), Square::Occupied(Marker::O));
        assert!(board.is_empty(Position::TopRight));
        assert_eq!(board.to_string(), "XX./OO./...");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XXO".parse::<Board>(),
            Err(BoardParseError::WrongLength(3))
        );
        assert_eq!(
            "XX?OO....".parse::<Board>(),
            Err(BoardParseError::InvalidCell('?'))
        );
    }

    #[test]
    fn test_empty_positions_ascending() {
        let board: Board = "XOX.O.X..".parse().unwrap();
        let empty: Vec<_> = board.empty_positions().map(Position::to_index).collect();
        assert_eq!(empty, vec![3, 5, 7, 8]);
    }
}
