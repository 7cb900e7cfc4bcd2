//! Single-cell step invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::{Board, GameState, Position, Square};

/// Invariant: history starts empty and every later snapshot differs from
/// its predecessor in exactly one square, which went from empty to a mark.
pub struct SingleCellStepInvariant;

impl SingleCellStepInvariant {
    /// Checks one step of the history.
    pub fn step_holds(before: &Board, after: &Board) -> bool {
        let mut changed = Position::ALL
            .iter()
            .filter(|pos| before.get(**pos) != after.get(**pos));
        match (changed.next(), changed.next()) {
            (Some(pos), None) => {
                before.get(*pos) == Square::Empty && after.get(*pos) != Square::Empty
            }
            _ => false,
        }
    }
}

impl Invariant<GameState> for SingleCellStepInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        history.first().is_some_and(|start| start.occupied() == 0)
            && history
                .windows(2)
                .all(|pair| Self::step_holds(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each history step places exactly one mark on an empty square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_single_mark_step_holds() {
        let before = Board::new();
        let after = before.with_mark(Position::Center, Player::X);
        assert!(SingleCellStepInvariant::step_holds(&before, &after));
    }

    #[test]
    fn test_unchanged_step_violates() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        assert!(!SingleCellStepInvariant::step_holds(&board, &board));
    }

    #[test]
    fn test_two_marks_violates() {
        let before = Board::new();
        let after = before
            .with_mark(Position::Center, Player::X)
            .with_mark(Position::TopLeft, Player::O);
        assert!(!SingleCellStepInvariant::step_holds(&before, &after));
    }

    #[test]
    fn test_overwrite_violates() {
        let before = Board::new().with_mark(Position::Center, Player::X);
        let after = Board::new().with_mark(Position::Center, Player::O);
        assert!(!SingleCellStepInvariant::step_holds(&before, &after));
    }

    #[test]
    fn test_erase_violates() {
        let before = Board::new().with_mark(Position::Center, Player::X);
        assert!(!SingleCellStepInvariant::step_holds(&before, &Board::new()));
    }

    #[test]
    fn test_game_holds() {
        let mut game = GameState::new();
        for index in [4, 0, 8] {
            game.play(index);
        }
        assert!(SingleCellStepInvariant::holds(&game));
    }
}
