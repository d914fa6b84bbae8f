//! A match: an engine, a game mode and the AI reply loop.

use super::action::MoveError;
use super::engine::GameEngine;
use super::minimax::Minimax;
use super::{Board, Marker, Outcome, Position};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Who sits across the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    PlayerVsPlayer,
    /// A human plays against the minimax AI holding `ai`.
    PlayerVsAi {
        /// Marker the AI plays.
        ai: Marker,
    },
}

impl GameMode {
    /// Player vs AI with the AI playing O.
    pub fn vs_ai() -> Self {
        Self::PlayerVsAi { ai: Marker::O }
    }

    /// Returns the display label for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Self::PlayerVsPlayer => "Player vs Player",
            Self::PlayerVsAi { .. } => "Player vs AI",
        }
    }

    /// Marker played by the AI, if any.
    pub fn ai_marker(self) -> Option<Marker> {
        match self {
            Self::PlayerVsPlayer => None,
            Self::PlayerVsAi { ai } => Some(ai),
        }
    }
}

/// What happened during one call to [`Match::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Cell the human played.
    pub human: Position,
    /// Cell the AI answered with, if it moved.
    pub ai_reply: Option<Position>,
    /// Outcome after both moves.
    pub outcome: Outcome,
}

/// A running game in a given [`GameMode`].
///
/// In player-vs-AI mode the AI answers every human move as soon as it is
/// its turn, and opens the game itself when it plays X.
#[derive(Debug, Clone)]
pub struct Match {
    engine: GameEngine,
    mode: GameMode,
    ai: Option<Minimax>,
}

impl Match {
    /// Starts a match. An AI playing X makes its opening move here.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        let mut game = Self {
            engine: GameEngine::new(),
            mode,
            ai: mode.ai_marker().map(Minimax::new),
        };
        game.ai_move();
        game
    }

    /// The game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The underlying engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        self.engine.board()
    }

    /// Current outcome.
    pub fn outcome(&self) -> Outcome {
        self.engine.outcome()
    }

    /// True while the AI is the side to move.
    pub fn is_ai_turn(&self) -> bool {
        self.engine.is_active()
            && self.mode.ai_marker() == Some(self.engine.current_player())
    }

    /// Plays a human move at `index`, then lets the AI reply.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NotYourTurn`] when the AI is to move, or any
    /// error the engine raises. Rejected moves change nothing.
    #[instrument(skip(self), fields(mode = self.mode.label()))]
    pub fn play(&mut self, index: usize) -> Result<Turn, MoveError> {
        if self.is_ai_turn() {
            let ai = self.engine.current_player();
            warn!(index, %ai, "Rejected human move on the AI's turn");
            return Err(MoveError::NotYourTurn(ai));
        }

        let human = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        self.engine.place(human)?;
        let ai_reply = self.ai_move();

        let outcome = self.engine.outcome();
        info!(human = %human, ai_reply = ?ai_reply, %outcome, "Turn complete");
        Ok(Turn {
            human,
            ai_reply,
            outcome,
        })
    }

    /// Resets the board. Returns the AI's opening move when it plays X.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Option<Position> {
        self.engine.reset();
        self.ai_move()
    }

    /// Status line for display.
    pub fn status(&self) -> String {
        match self.engine.outcome() {
            Outcome::InProgress => format!("Current Player: {}", self.engine.current_player()),
            Outcome::Win(winner) => format!("Player {} Wins!", winner),
            Outcome::Draw => "Game Draw!".to_string(),
        }
    }

    fn ai_move(&mut self) -> Option<Position> {
        if !self.is_ai_turn() {
            return None;
        }
        let pos = self.ai?.best_move(self.engine.board())?;
        match self.engine.place(pos) {
            Ok(_) => Some(pos),
            Err(e) => {
                warn!(error = %e, position = %pos, "AI move rejected");
                None
            }
        }
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
