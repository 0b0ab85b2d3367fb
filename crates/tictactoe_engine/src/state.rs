//! Stored game state.

use crate::{Board, Cell, Coord, Player};
use serde::{Deserialize, Serialize};

/// Complete stored state of one game.
///
/// Win, tie and phase are not stored; they are recomputed from the board
/// and `started` whenever they are asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player whose mark the next accepted move places.
    current_player: Player,
    /// Whether any move has been accepted since the last reset.
    started: bool,
}

impl GameState {
    /// Creates a fresh game: empty board, X to move, not started.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns whether a move has been accepted since the last reset.
    pub fn started(&self) -> bool {
        self.started
    }

    /// Places a mark (unchecked; the engine validates first).
    pub(crate) fn place(&mut self, at: Coord, player: Player) {
        self.board.set(at, Cell::Occupied(player));
        self.started = true;
    }

    /// Hands the turn to the other player.
    pub(crate) fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert_eq!(state.board(), &Board::new());
        assert_eq!(state.current_player(), Player::X);
        assert!(!state.started());
    }

    #[test]
    fn test_place_marks_started() {
        let mut state = GameState::new();
        state.place(Coord::at(1, 1), Player::X);
        assert!(state.started());
        assert_eq!(state.board().get(Coord::at(1, 1)), Cell::Occupied(Player::X));
        // Placing does not move the turn on by itself.
        assert_eq!(state.current_player(), Player::X);
        state.pass_turn();
        assert_eq!(state.current_player(), Player::O);
    }
}
