//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the engine, the contracts and the presentation layer all
//! evaluate the same definitions.

pub mod tie;
pub mod win;

pub use tie::{is_full, is_tie};
pub use win::{LINES, Line, check_winner, winning_line};
