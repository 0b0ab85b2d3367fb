//! Application state and logic.

use crate::input::{Action, action_for, move_cursor};
use crossterm::event::KeyCode;
use tictactoe_engine::{Coord, EngineError, GameEngine, GameSnapshot, MoveOutcome};
use tracing::{debug, warn};

/// Main application state.
///
/// Owns the only [`GameEngine`]; rendering code sees snapshots.
pub struct App {
    engine: GameEngine,
    cursor: Coord,
    notice: Option<String>,
    show_hints: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game and the cursor centred.
    pub fn new(show_hints: bool) -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Coord::ALL[4],
            notice: None,
            show_hints,
            should_quit: false,
        }
    }

    /// Handles a key press.
    ///
    /// # Errors
    ///
    /// Passes on engine contract violations; those are bugs, not input
    /// mistakes.
    pub fn handle_key(&mut self, key: KeyCode) -> Result<(), EngineError> {
        match action_for(key) {
            Some(action) => self.apply(action),
            None => Ok(()),
        }
    }

    /// Applies one action.
    pub fn apply(&mut self, action: Action) -> Result<(), EngineError> {
        match action {
            Action::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
                Ok(())
            }
            Action::PlayAtCursor => self.select(self.cursor.row(), self.cursor.col()),
            Action::PlayAt(at) => {
                self.cursor = at;
                self.select(at.row(), at.col())
            }
            Action::Reset => {
                self.restart();
                Ok(())
            }
            Action::Quit => {
                self.should_quit = true;
                Ok(())
            }
        }
    }

    /// Forwards a cell selection to the engine.
    pub fn select(&mut self, row: usize, col: usize) -> Result<(), EngineError> {
        debug!(row, col, "Cell selected");

        match self.engine.play_move(row, col)? {
            MoveOutcome::Placed(_) => {
                self.notice = None;
                match serde_json::to_string(&self.engine.snapshot()) {
                    Ok(json) => debug!(%json, "Board updated"),
                    Err(error) => warn!(%error, "Could not serialize snapshot"),
                }
            }
            MoveOutcome::Rejected(reason) => {
                self.notice = Some(reason.to_string());
            }
        }
        Ok(())
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.engine.reset();
        self.notice = None;
    }

    /// Read-only view of the game for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        self.engine.snapshot()
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Reason the last move was turned away, until the next move or reset.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether empty cells show their numbers.
    pub fn show_hints(&self) -> bool {
        self.show_hints
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
