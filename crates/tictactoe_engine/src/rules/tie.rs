//! Tie detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Checks for a tie: no winner, the game has started, and no empty cell.
///
/// `started` keeps a pristine board from ever counting as finished.
#[instrument(skip(board))]
pub fn is_tie(board: &Board, started: bool) -> bool {
    started && is_full(board) && check_winner(board).is_none()
}
