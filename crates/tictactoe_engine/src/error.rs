//! Engine error types.

use derive_more::{Display, Error};

/// Caller contract violations.
///
/// Routine rule rejections (occupied cell, finished game) are not errors;
/// they come back as [`crate::MoveOutcome::Rejected`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum EngineError {
    /// Row or column outside `0..=2`.
    #[display("Coordinate ({row}, {col}) is outside the 3x3 board")]
    InvalidCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}
