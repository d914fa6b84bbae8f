//! Authoritative game state and move application.

use super::action::{Move, MoveError};
use super::invariants::{EngineInvariants, InvariantSet};
use super::rules::{self, WinLine};
use super::{Board, Marker, Outcome, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Complete game state.
///
/// Only [`GameEngine`] mutates it, so every value observed through the
/// engine satisfies the invariants in [`crate::invariants`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Marker,
    pub(crate) active: bool,
    pub(crate) outcome: Outcome,
    pub(crate) winning_line: Option<WinLine>,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates the initial state: empty board, X to move, active.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Marker::X,
            active: true,
            outcome: Outcome::InProgress,
            winning_line: None,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the marker to move next (or the last mover once terminal).
    pub fn current_player(&self) -> Marker {
        self.current_player
    }

    /// Returns false once the game has been won or drawn.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the game outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the completed line of a won game.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning_line
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Marker to move next.
    pub fn current_player(&self) -> Marker {
        self.state.current_player()
    }

    /// Current outcome.
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    /// Whether moves are still accepted.
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Completed line, once the game is won.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.state.winning_line()
    }

    /// Moves played so far.
    pub fn history(&self) -> &[Move] {
        self.state.history()
    }

    /// Places the current player's marker at a board index (0-8).
    ///
    /// # Errors
    ///
    /// Rejects the move, leaving the state untouched, if the index is out
    /// of range, the square is occupied or the game is over.
    #[instrument(skip(self), fields(player = %self.state.current_player))]
    pub fn apply_move(&mut self, index: usize) -> Result<Outcome, MoveError> {
        let pos = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Rejected move outside the board");
            MoveError::OutOfRange(index)
        })?;
        self.place(pos)
    }

    /// Places the current player's marker at `pos`.
    ///
    /// # Errors
    ///
    /// Same as [`GameEngine::apply_move`], minus the range check.
    #[instrument(skip(self), fields(player = %self.state.current_player))]
    pub fn place(&mut self, pos: Position) -> Result<Outcome, MoveError> {
        if !self.state.active {
            warn!(position = %pos, "Rejected move after game over");
            return Err(MoveError::GameOver);
        }

        if !self.state.board.is_empty(pos) {
            warn!(position = %pos, "Rejected move on occupied square");
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.state.current_player;
        self.state.board.set(pos, Square::Occupied(player));
        self.state.history.push(Move::new(player, pos));

        let outcome = rules::evaluate_outcome(&self.state.board);
        self.state.outcome = outcome;
        match outcome {
            Outcome::InProgress => {
                self.state.current_player = player.opponent();
                debug!(position = %pos, next = %self.state.current_player, "Move applied");
            }
            Outcome::Win(_) => {
                self.state.active = false;
                self.state.winning_line =
                    rules::winning_line(&self.state.board).map(|(_, line)| line);
                info!(position = %pos, %outcome, "Game won");
            }
            Outcome::Draw => {
                self.state.active = false;
                info!(position = %pos, %outcome, "Game drawn");
            }
        }

        debug_assert!(
            EngineInvariants::check_all(&self.state).is_ok(),
            "Engine invariants violated after {:?}",
            self.state.history.last()
        );

        Ok(outcome)
    }

    /// Starts over: empty board, X to move, active.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.state.history.len(), "Resetting game");
        self.state = GameState::new();
    }
}
