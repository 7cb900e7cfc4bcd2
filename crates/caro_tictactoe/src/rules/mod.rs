//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Rules are kept apart from the
//! history so every query is recomputed from the current snapshot.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, WinResult, check_winner, evaluate};
