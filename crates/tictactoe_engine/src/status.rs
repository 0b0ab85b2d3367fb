//! Derived game status.

use crate::Player;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// One-line summary for the presentation layer.
///
/// The `Display` form is the status message shown to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum GameStatus {
    /// A player completed a line.
    #[display("Player {_0} wins! 🎉")]
    Win(Player),
    /// The board filled with no line completed.
    #[display("It's a tie!")]
    Tie,
    /// Game continues; the given player moves next.
    #[display("Player {_0}'s turn")]
    Turn(Player),
}

impl GameStatus {
    /// Returns true once the game has been won or tied.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Turn(_))
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Win(player) => Some(player),
            _ => None,
        }
    }
}

/// Position in the game's lifecycle.
///
/// `Empty → InProgress → {Won, Tied}`; only a reset leaves the terminal
/// phases, and it always lands on `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Phase {
    /// Fresh board, no move accepted yet.
    #[display("Empty")]
    Empty,
    /// At least one move played, no result yet.
    #[display("In progress")]
    InProgress,
    /// Finished with a winner.
    #[display("Won by {_0}")]
    Won(Player),
    /// Finished with a full board and no winner.
    #[display("Tied")]
    Tied,
}

impl Phase {
    /// Returns true for `Won` and `Tied`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won(_) | Phase::Tied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        assert_eq!(GameStatus::Win(Player::X).to_string(), "Player X wins! 🎉");
        assert_eq!(GameStatus::Tie.to_string(), "It's a tie!");
        assert_eq!(GameStatus::Turn(Player::O).to_string(), "Player O's turn");
    }

    #[test]
    fn test_status_is_over() {
        assert!(GameStatus::Win(Player::O).is_over());
        assert!(GameStatus::Tie.is_over());
        assert!(!GameStatus::Turn(Player::X).is_over());
        assert_eq!(GameStatus::Win(Player::O).winner(), Some(Player::O));
        assert_eq!(GameStatus::Tie.winner(), None);
    }

    #[test]
    fn test_terminal_phases() {
        assert!(Phase::Won(Player::X).is_terminal());
        assert!(Phase::Tied.is_terminal());
        assert!(!Phase::Empty.is_terminal());
        assert!(!Phase::InProgress.is_terminal());
    }
}
