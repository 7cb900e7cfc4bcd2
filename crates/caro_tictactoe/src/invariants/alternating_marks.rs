//! Alternating marks invariant: X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: the move producing step `i` was made by X for odd `i` and by
/// O for even `i`, so the turn can always be derived from the step parity.
pub struct AlternatingMarksInvariant;

impl Invariant<GameState> for AlternatingMarksInvariant {
    fn holds(game: &GameState) -> bool {
        game.moves()
            .iter()
            .enumerate()
            .all(|(i, mv)| mv.player == Player::for_step(i))
    }

    fn description() -> &'static str {
        "Players alternate, starting with X"
    }
}
