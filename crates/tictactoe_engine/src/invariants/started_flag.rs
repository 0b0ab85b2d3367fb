//! Started flag invariant.

use super::Invariant;
use crate::GameState;

/// Invariant: `started` is set exactly when the board holds a mark.
pub struct StartedFlagInvariant;

impl Invariant<GameState> for StartedFlagInvariant {
    fn holds(state: &GameState) -> bool {
        state.started() == (state.board().occupied() > 0)
    }

    fn description() -> &'static str {
        "Game is started exactly when a mark is on the board"
    }
}
