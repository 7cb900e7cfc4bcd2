//! Cursor invariant: the pointer and the move log line up with the history.

use super::Invariant;
use crate::{GameState, Square};

/// Invariant: `current_move` indexes an existing snapshot and the move log
/// has one entry per step after the first, each matching its snapshot.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        game.current_move() < history.len()
            && game.moves().len() + 1 == history.len()
            && game.moves().iter().zip(&history[1..]).all(|(mv, board)| {
                board.get(mv.position) == Square::Occupied(mv.player)
            })
    }

    fn description() -> &'static str {
        "Current step is in range and the move log matches the history"
    }
}
