//! Tic-tac-toe core - a UI-agnostic game engine and minimax opponent.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Marker`] and the typed [`Position`]
//! - **Rules**: win lines and the shared terminal-state evaluator
//!   ([`evaluate_outcome`])
//! - **Engine**: [`GameEngine`] owns board, turn order and move legality
//! - **Minimax**: [`find_best_move`] picks the optimal cell for a marker
//! - **Invariants**: checkable properties of every reachable [`GameState`]
//! - **Match**: [`Match`] drives human moves and AI replies for a [`GameMode`]
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameEngine, Marker, Outcome, find_best_move};
//!
//! let mut engine = GameEngine::new();
//! assert_eq!(engine.apply_move(4), Ok(Outcome::InProgress));
//!
//! let reply = find_best_move(engine.board(), Marker::O).expect("board has empty cells");
//! assert_eq!(engine.apply_move(reply.to_index()), Ok(Outcome::InProgress));
//! assert_eq!(engine.current_player(), Marker::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod invariants;
mod minimax;
mod outcome;
mod position;
pub mod rules;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use engine::{GameEngine, GameState};
pub use minimax::{DRAW_SCORE, LOSS_SCORE, Minimax, WIN_SCORE, find_best_move};
pub use outcome::Outcome;
pub use position::Position;
pub use rules::{WIN_LINES, WinLine, evaluate_outcome, winning_line};
pub use session::{GameMode, Match, Turn};
pub use types::{Board, BoardParseError, Marker, Square};
