//! Mark balance invariant: X never trails O and never leads by more than one.

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: X and O marks stay balanced.
///
/// X moves first and players alternate, so `count(X) - count(O)` is
/// always 0 or 1.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X and O mark counts differ by at most one, X never behind"
    }
}
