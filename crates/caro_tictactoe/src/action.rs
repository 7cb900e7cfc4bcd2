//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events recorded in the move log. Actions that fail a
//! precondition are not errors: they are ignored, and [`PlayOutcome`] says why.

use crate::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Zero-based `"row, col"` text used by the move list.
    pub fn coordinates_label(&self) -> String {
        let (row, col) = self.position.coordinates();
        format!("{}, {}", row, col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.player, self.position.label(), self.coordinates_label())
    }
}

/// Why a play request left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The current board already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The index does not name a square.
    #[display("Position {} is off the board (must be 0-8)", _0)]
    OutOfBounds(usize),
}

/// Result of a play request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The move was applied and appended to the history.
    Placed(Move),
    /// The request was a no-op.
    Ignored(Rejection),
}

impl PlayOutcome {
    /// Returns true if the move was applied.
    pub fn is_placed(&self) -> bool {
        matches!(self, PlayOutcome::Placed(_))
    }

    /// The applied move, if any.
    pub fn placed(&self) -> Option<Move> {
        match self {
            PlayOutcome::Placed(mv) => Some(*mv),
            PlayOutcome::Ignored(_) => None,
        }
    }
}
