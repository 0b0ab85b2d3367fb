//! The tic-tac-toe game engine.

use crate::contracts::{Contract, MoveContract};
use crate::rules::{Line, check_winner, is_tie, winning_line};
use crate::{
    Board, Coord, EngineError, GameSnapshot, GameState, GameStatus, Move, MoveOutcome, Phase,
    Player,
};
use tracing::{debug, info, instrument, warn};

/// Owns one game's state and applies moves to it.
///
/// All mutation goes through [`play_move`](Self::play_move) and
/// [`reset`](Self::reset); everything else is a read-only query computed
/// from the current state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates an engine holding a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the board, gives X the first move and marks the game unstarted.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = GameState::new();
        debug!("Game reset");
    }

    /// Plays the current player's mark at (`row`, `col`).
    ///
    /// Returns [`MoveOutcome::Rejected`] without touching the state when
    /// the cell is taken or the game is already won. The turn passes to the
    /// opponent only if the game is still running afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCoordinate`] if `row` or `col` is
    /// outside `0..=2`.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn play_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, EngineError> {
        let at = Coord::new(row, col).inspect_err(|error| {
            warn!(%error, "Move outside the board");
        })?;

        if let Err(reason) = MoveContract::pre(&self.state, &at) {
            debug!(%reason, "Move rejected");
            return Ok(MoveOutcome::Rejected(reason));
        }

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        let player = self.state.current_player();
        self.state.place(at, player);

        match self.status() {
            GameStatus::Turn(_) => self.state.pass_turn(),
            status => info!(%status, "Game finished"),
        }

        #[cfg(debug_assertions)]
        crate::contracts::assert_transition(&before, &self.state);

        let mov = Move::new(player, at);
        debug!(%mov, "Move accepted");
        Ok(MoveOutcome::Placed(mov))
    }

    /// Returns the stored game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the player whose mark the next move places.
    ///
    /// After a win or tie this stays on the player who moved last.
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Returns whether a move has been accepted since the last reset.
    pub fn started(&self) -> bool {
        self.state.started()
    }

    /// Returns the mark owning the first completed line, if any.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self.state.board())
    }

    /// Returns the first completed line, if any.
    pub fn winning_line(&self) -> Option<Line> {
        winning_line(self.state.board()).map(|(line, _)| line)
    }

    /// True when the game has started, the board is full and nobody won.
    pub fn is_tie(&self) -> bool {
        is_tie(self.state.board(), self.state.started())
    }

    /// Summary for the status line.
    pub fn status(&self) -> GameStatus {
        if let Some(player) = self.winner() {
            GameStatus::Win(player)
        } else if self.is_tie() {
            GameStatus::Tie
        } else {
            GameStatus::Turn(self.state.current_player())
        }
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> Phase {
        match self.status() {
            GameStatus::Win(player) => Phase::Won(player),
            GameStatus::Tie => Phase::Tied,
            GameStatus::Turn(_) if self.state.started() => Phase::InProgress,
            GameStatus::Turn(_) => Phase::Empty,
        }
    }

    /// Checks whether a move at (`row`, `col`) would be accepted.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCoordinate`] for coordinates off the
    /// board.
    pub fn is_cell_playable(&self, row: usize, col: usize) -> Result<bool, EngineError> {
        let at = Coord::new(row, col)?;
        Ok(MoveContract::pre(&self.state, &at).is_ok())
    }

    /// Every cell where a move would be accepted, in row-major order.
    pub fn playable_cells(&self) -> Vec<Coord> {
        Coord::ALL
            .into_iter()
            .filter(|at| MoveContract::pre(&self.state, at).is_ok())
            .collect()
    }

    /// Read-only view for the presentation layer.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }
}
