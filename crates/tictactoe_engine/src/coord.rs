//! Validated board coordinates.

use crate::EngineError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

const LABELS: [&str; 9] = [
    "Top-left",
    "Top-center",
    "Top-right",
    "Middle-left",
    "Center",
    "Middle-right",
    "Bottom-left",
    "Bottom-center",
    "Bottom-right",
];

/// A cell address on the 3x3 board.
///
/// A `Coord` can only be built from a row and column in `0..=2`, so every
/// value indexes the board safely. Deserialization goes through the same
/// check.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[display("({row}, {col})")]
#[serde(try_from = "[usize; 2]", into = "[usize; 2]")]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// All nine coordinates in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord::at(0, 0),
        Coord::at(0, 1),
        Coord::at(0, 2),
        Coord::at(1, 0),
        Coord::at(1, 1),
        Coord::at(1, 2),
        Coord::at(2, 0),
        Coord::at(2, 1),
        Coord::at(2, 2),
    ];

    /// Creates a coordinate, rejecting anything off the board.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, EngineError> {
        if row < 3 && col < 3 {
            Ok(Self { row, col })
        } else {
            Err(EngineError::InvalidCoordinate { row, col })
        }
    }

    /// Unchecked constructor for the const tables in this crate.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Creates a coordinate from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable name, e.g. "Top-left".
    pub fn label(self) -> &'static str {
        LABELS[self.index()]
    }
}

impl TryFrom<[usize; 2]> for Coord {
    type Error = EngineError;

    fn try_from([row, col]: [usize; 2]) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Coord> for [usize; 2] {
    fn from(coord: Coord) -> Self {
        [coord.row, coord.col]
    }
}
