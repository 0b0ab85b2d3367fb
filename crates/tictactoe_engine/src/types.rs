//! Core domain types for tic-tac-toe.

use crate::{Coord, EngineError};
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    #[default]
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Rendering symbol: `"X"`, `"O"` or `""`.
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => "",
            Cell::Occupied(Player::X) => "X",
            Cell::Occupied(Player::O) => "O",
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from explicit rows.
    pub fn from_rows(cells: [[Cell; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Gets the cell at a validated coordinate.
    pub fn get(&self, at: Coord) -> Cell {
        self.cells[at.row()][at.col()]
    }

    /// Gets the cell at a raw row and column.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, EngineError> {
        Coord::new(row, col).map(|at| self.get(at))
    }

    /// Sets the cell at the given coordinate.
    pub(crate) fn set(&mut self, at: Coord, cell: Cell) {
        self.cells[at.row()][at.col()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, at: Coord) -> bool {
        self.get(at).is_empty()
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Counts the marks placed by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.mark() == Some(player))
            .count()
    }

    /// Counts occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| !cell.is_empty()).count()
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Iterates over every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        Coord::ALL.into_iter().map(|at| (at, self.get(at)))
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based row-major number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell {
                    Cell::Empty => result.push_str(&(row * 3 + col + 1).to_string()),
                    Cell::Occupied(_) => result.push_str(cell.symbol()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_player_display() {
        assert_eq!(Player::X.to_string(), "X");
        assert_eq!(Player::O.to_string(), "O");
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.iter().all(|(_, cell)| cell == Cell::Empty));
        assert_eq!(board.occupied(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn test_set_and_count() {
        let mut board = Board::new();
        board.set(Coord::at(0, 0), Cell::Occupied(Player::X));
        board.set(Coord::at(1, 1), Cell::Occupied(Player::O));
        board.set(Coord::at(2, 2), Cell::Occupied(Player::X));

        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 1);
        assert_eq!(board.occupied(), 3);
        assert!(!board.is_empty(Coord::at(1, 1)));
        assert!(board.is_empty(Coord::at(1, 0)));
    }

    #[test]
    fn test_cell_rejects_out_of_range() {
        let board = Board::new();
        assert_eq!(board.cell(0, 0), Ok(Cell::Empty));
        assert_eq!(
            board.cell(1, 3),
            Err(EngineError::InvalidCoordinate { row: 1, col: 3 })
        );
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.set(Coord::at(0, 0), Cell::Occupied(Player::X));
        board.set(Coord::at(1, 1), Cell::Occupied(Player::O));
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Cell::Empty.symbol(), "");
        assert_eq!(Cell::Occupied(Player::X).symbol(), "X");
        assert_eq!(Cell::Occupied(Player::O).mark(), Some(Player::O));
    }
}
