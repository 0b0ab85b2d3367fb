//! First-class move types for tic-tac-toe.
//!
//! A move either lands on the board or is turned away by the rules. Both are
//! ordinary outcomes; only malformed coordinates are errors.

use crate::{Coord, Player};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A placed mark: who played, and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("{player} -> {}", at.label())]
pub struct Move {
    /// The player making the move.
    player: Player,
    /// The cell that received the mark.
    at: Coord,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, at: Coord) -> Self {
        Self { player, at }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the cell of this move.
    pub fn at(&self) -> Coord {
        self.at
    }
}

/// Why the rules turned a move away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Rejection {
    /// The cell already holds a mark.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(Coord),
    /// A player has already won.
    #[display("Game is already over")]
    GameOver,
}

/// Result of submitting a move to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The mark was placed.
    Placed(Move),
    /// The move was illegal; the game state is unchanged.
    Rejected(Rejection),
}

impl MoveOutcome {
    /// Returns true if the mark was placed.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed(_))
    }
}
