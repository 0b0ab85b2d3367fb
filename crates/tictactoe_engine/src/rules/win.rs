//! Win detection logic for tic-tac-toe.

use crate::{Board, Coord, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three cells that win the game when they hold the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Coord; 3]);

impl Line {
    /// The three coordinates of this line, in table order.
    pub fn cells(&self) -> [Coord; 3] {
        self.0
    }

    /// Checks whether the line passes through `at`.
    pub fn contains(&self, at: Coord) -> bool {
        self.0.contains(&at)
    }

    /// Returns the mark filling all three cells, if any.
    pub fn owner(&self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.0;
        let first = board.get(a);
        if first == board.get(b) && first == board.get(c) {
            first.mark()
        } else {
            None
        }
    }
}

/// The eight winning lines: rows, then columns, then the two diagonals.
///
/// Scans always follow this order, so the first completed line is
/// deterministic.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Coord::at(0, 0), Coord::at(0, 1), Coord::at(0, 2)]),
    Line([Coord::at(1, 0), Coord::at(1, 1), Coord::at(1, 2)]),
    Line([Coord::at(2, 0), Coord::at(2, 1), Coord::at(2, 2)]),
    // Columns
    Line([Coord::at(0, 0), Coord::at(1, 0), Coord::at(2, 0)]),
    Line([Coord::at(0, 1), Coord::at(1, 1), Coord::at(2, 1)]),
    Line([Coord::at(0, 2), Coord::at(1, 2), Coord::at(2, 2)]),
    // Diagonals
    Line([Coord::at(0, 0), Coord::at(1, 1), Coord::at(2, 2)]),
    Line([Coord::at(0, 2), Coord::at(1, 1), Coord::at(2, 0)]),
];

/// Returns the first completed line and its owner.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Line, Player)> {
    LINES
        .iter()
        .find_map(|line| line.owner(board).map(|player| (*line, player)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(_, player)| player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    fn board_with(marks: &[((usize, usize), Player)]) -> Board {
        let mut board = Board::new();
        for &((row, col), player) in marks {
            board.set(Coord::at(row, col), Cell::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            ((0, 0), Player::X),
            ((0, 1), Player::X),
            ((0, 2), Player::X),
        ]);
        assert_eq!(check_winner(&board), Some(Player::X));
        assert_eq!(winning_line(&board).map(|(line, _)| line), Some(LINES[0]));
    }

    #[test]
    fn test_winner_column() {
        let board = board_with(&[
            ((0, 1), Player::O),
            ((1, 1), Player::O),
            ((2, 1), Player::O),
        ]);
        assert_eq!(winning_line(&board), Some((LINES[4], Player::O)));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            ((0, 2), Player::O),
            ((1, 1), Player::O),
            ((2, 0), Player::O),
        ]);
        assert_eq!(winning_line(&board), Some((LINES[7], Player::O)));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[((0, 0), Player::X), ((0, 1), Player::X)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_has_no_owner() {
        let board = board_with(&[
            ((0, 0), Player::X),
            ((0, 1), Player::O),
            ((0, 2), Player::X),
        ]);
        assert_eq!(LINES[0].owner(&board), None);
    }

    #[test]
    fn test_first_line_in_table_order_wins() {
        // Row 0 and column 0 both complete; the row comes first.
        let board = board_with(&[
            ((0, 0), Player::X),
            ((0, 1), Player::X),
            ((0, 2), Player::X),
            ((1, 0), Player::X),
            ((2, 0), Player::X),
        ]);
        assert_eq!(winning_line(&board), Some((LINES[0], Player::X)));
    }

    #[test]
    fn test_lines_cover_every_cell() {
        for at in Coord::ALL {
            assert!(LINES.iter().any(|line| line.contains(at)));
        }
        assert_eq!(LINES.iter().filter(|l| l.contains(Coord::at(1, 1))).count(), 4);
    }
}
