//! Single winner invariant.

use super::Invariant;
use crate::rules::LINES;
use crate::{GameState, Player};
use strum::IntoEnumIterator;

/// Invariant: at most one player owns a completed line.
pub struct SingleWinnerInvariant;

impl Invariant<GameState> for SingleWinnerInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        Player::iter()
            .filter(|&player| LINES.iter().any(|line| line.owner(board) == Some(player)))
            .count()
            <= 1
    }

    fn description() -> &'static str {
        "At most one player has three in a row"
    }
}
