//! CARO - tic-tac-toe in the terminal with a time-travel move list.
//!
//! # Architecture
//!
//! - **Core**: [`caro_tictactoe`] holds the board, win detection and the
//!   history-backed game state.
//! - **TUI**: ratatui front end driving one game session from key presses.
//! - **Replay**: non-interactive command that applies a move sequence and
//!   prints the result.
//! - **Config**: optional TOML file plus CLI flags.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod replay;
pub mod tui;

pub use config::{CaroConfig, ConfigError};
pub use replay::{ReplayError, parse_moves, replay};

pub use caro_tictactoe::{
    Board, GameState, GameStatus, Move, PlayOutcome, Player, Position, Rejection, SortOrder,
    Square, WinResult,
};
