//! Contract-based validation for moves.
//!
//! A contract pairs a precondition, which decides whether a move may be
//! applied, with a postcondition over the state before and after it.

use crate::invariants::{EngineInvariants, InvariantSet, InvariantViolation};
use crate::rules::check_winner;
use crate::{Board, Coord, GameState, Rejection};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: nobody has won yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects with [`Rejection::GameOver`] once a line is complete.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), Rejection> {
        match check_winner(state.board()) {
            Some(_) => Err(Rejection::GameOver),
            None => Ok(()),
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects with [`Rejection::CellOccupied`] if `at` holds a mark.
    #[instrument(skip(state))]
    pub fn check(at: Coord, state: &GameState) -> Result<(), Rejection> {
        if state.board().is_empty(at) {
            Ok(())
        } else {
            Err(Rejection::CellOccupied(at))
        }
    }
}

/// Composite precondition: game not won and cell empty.
///
/// A full board needs no separate check; every cell is occupied.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state))]
    pub fn check(at: Coord, state: &GameState) -> Result<(), Rejection> {
        GameNotOver::check(state)?;
        CellIsEmpty::check(at, state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: exactly one cell went from empty to a mark; nothing else
/// changed.
pub struct MonotonicBoard;

impl MonotonicBoard {
    /// Compares the boards before and after a move.
    pub fn holds(before: &Board, after: &Board) -> bool {
        let mut filled = 0;
        for (at, old) in before.iter() {
            let new = after.get(at);
            if old == new {
                continue;
            }
            if !old.is_empty() || new.is_empty() {
                return false;
            }
            filled += 1;
        }
        filled == 1
    }

    /// Human-readable description.
    pub fn description() -> &'static str {
        "Exactly one empty cell was filled and no mark changed"
    }
}

/// Contract for move application.
///
/// Preconditions:
/// - No winner yet
/// - Target cell empty
///
/// Postconditions:
/// - Board is monotonic
/// - Game is marked started
/// - All [`EngineInvariants`] hold
pub struct MoveContract;

impl Contract<GameState, Coord> for MoveContract {
    fn pre(state: &GameState, at: &Coord) -> Result<(), Rejection> {
        LegalMove::check(*at, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !MonotonicBoard::holds(before.board(), after.board()) {
            violations.push(InvariantViolation::new(MonotonicBoard::description()));
        }
        if !after.started() {
            violations.push(InvariantViolation::new("Accepted move marks the game started"));
        }
        if let Err(found) = EngineInvariants::check_all(after) {
            violations.extend(found);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Asserts the move postconditions; only compiled into debug builds.
#[cfg(debug_assertions)]
#[instrument(skip_all)]
pub(crate) fn assert_transition(before: &GameState, after: &GameState) {
    if let Err(violations) = MoveContract::post(before, after) {
        let descriptions = violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        tracing::warn!(%descriptions, "Move postcondition failed");
        panic!("Postcondition failed: {descriptions}");
    }
}
