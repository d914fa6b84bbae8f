//! Classification of a board state.

use super::types::Marker;
use serde::{Deserialize, Serialize};

/// Terminal or non-terminal classification of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and at least one empty cell.
    #[default]
    InProgress,
    /// A marker completed a line.
    Win(Marker),
    /// Board full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Marker> {
        match self {
            Outcome::Win(marker) => Some(*marker),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true for wins and draws.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(marker) => write!(f, "Player {} wins", marker),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
