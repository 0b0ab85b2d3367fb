//! Serializable read-only view of a game.

use crate::rules::Line;
use crate::{Board, GameEngine, GameStatus, Phase, Player};
use serde::{Deserialize, Serialize};

/// Everything a presentation layer needs to draw one frame.
///
/// Built from a [`GameEngine`]; holding a snapshot never lets the caller
/// change the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The board.
    board: Board,
    /// Player whose mark the next move places.
    current_player: Player,
    /// Status summary.
    status: GameStatus,
    /// Lifecycle phase.
    phase: Phase,
    /// First completed line, once the game is won.
    winning_line: Option<Line>,
}

impl GameSnapshot {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the status summary.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the winning line, if any.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }
}

impl From<&GameEngine> for GameSnapshot {
    fn from(engine: &GameEngine) -> Self {
        Self {
            board: engine.board().clone(),
            current_player: engine.current_player(),
            status: engine.status(),
            phase: engine.phase(),
            winning_line: engine.winning_line(),
        }
    }
}
