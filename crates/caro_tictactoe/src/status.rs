//! Derived game status.

use crate::rules::{self, WinResult};
use crate::{Board, Player};
use serde::{Deserialize, Serialize};

/// Current status of a board, recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress {
        /// Player to place the next mark.
        next: Player,
    },
    /// A line is complete.
    Won(WinResult),
    /// Board is full with no completed line.
    Draw,
}

impl GameStatus {
    /// Evaluates `board` with `next` as the player to move.
    pub fn of(board: &Board, next: Player) -> Self {
        if let Some(win) = rules::evaluate(board) {
            GameStatus::Won(win)
        } else if rules::is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress { next }
        }
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// The winning mark, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(win) => Some(*win.mark()),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next),
            GameStatus::Won(win) => write!(f, "Winner: {}", win.mark()),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
