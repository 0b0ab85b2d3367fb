//! Turn order invariant: the current player follows from the marks on the board.

use super::Invariant;
use crate::rules::{check_winner, is_tie};
use crate::{GameState, Player};

/// Invariant: `current_player` agrees with the board.
///
/// While the game runs, X is to move exactly when both players have placed
/// the same number of marks. Once it is won or tied the turn stays on the
/// player who made the last move.
pub struct TurnOrderInvariant;

impl Invariant<GameState> for TurnOrderInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let x = board.count(Player::X);
        let o = board.count(Player::O);

        let over = check_winner(board).is_some() || is_tie(board, state.started());
        let expected = match (over, x > o) {
            // Last mover keeps the turn.
            (true, true) => Player::X,
            (true, false) => Player::O,
            // Next mover.
            (false, true) => Player::O,
            (false, false) => Player::X,
        };

        state.current_player() == expected
    }

    fn description() -> &'static str {
        "Current player matches the marks on the board (X, O, X, ...)"
    }
}
