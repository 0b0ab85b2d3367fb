//! Tic-tac-toe game-state engine.
//!
//! The engine owns a 3x3 board, validates moves, alternates turns and
//! derives win/tie status on demand. A presentation layer drives it through
//! [`GameEngine::play_move`] and [`GameEngine::reset`] and reads the
//! resulting state back to render.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameStatus, MoveOutcome, Player};
//!
//! # fn main() -> Result<(), tictactoe_engine::EngineError> {
//! let mut engine = GameEngine::new();
//! assert!(matches!(engine.play_move(1, 1)?, MoveOutcome::Placed(_)));
//! assert_eq!(engine.status(), GameStatus::Turn(Player::O));
//!
//! // Occupied cells are rejected without touching the state.
//! assert!(matches!(engine.play_move(1, 1)?, MoveOutcome::Rejected(_)));
//! assert_eq!(engine.current_player(), Player::O);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod coord;
mod engine;
mod error;
mod invariants;
mod rules;
mod snapshot;
mod state;
mod status;
mod types;

pub use action::{Move, MoveOutcome, Rejection};
pub use contracts::{CellIsEmpty, Contract, GameNotOver, LegalMove, MonotonicBoard, MoveContract};
pub use coord::Coord;
pub use engine::GameEngine;
pub use error::EngineError;
pub use invariants::{
    EngineInvariants, Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
    SingleWinnerInvariant, StartedFlagInvariant, TurnOrderInvariant,
};
pub use rules::{LINES, Line, check_winner, is_full, is_tie, winning_line};
pub use snapshot::GameSnapshot;
pub use state::GameState;
pub use status::{GameStatus, Phase};
pub use types::{Board, Cell, Player};

/// Alias for clarity when talking about placed symbols.
pub type Mark = Player;
