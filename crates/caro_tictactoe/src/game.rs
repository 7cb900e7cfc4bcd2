//! History-backed game state with time travel.
//!
//! The state is a list of board snapshots plus a pointer into it. Whose
//! turn it is, who won and the status line are all derived from the
//! snapshot under the pointer, never stored.

use crate::action::{Move, PlayOutcome, Rejection};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::move_list::{MoveEntry, SortOrder};
use crate::rules::{self, WinResult};
use crate::{Board, GameStatus, Player, Position};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Complete game state: board snapshots, move log and current step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Board snapshots; index 0 is the empty starting board.
    history: Vec<Board>,
    /// Move that produced `history[i + 1]`.
    moves: Vec<Move>,
    /// Index of the snapshot on display.
    current_move: usize,
}

impl GameState {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            moves: Vec::new(),
            current_move: 0,
        }
    }

    /// Board snapshot at the current step.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Index of the snapshot on display.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// All board snapshots, including abandoned-by-jump future steps.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Move log, aligned so that `moves()[i]` produced `history()[i + 1]`.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Returns true if X places the next mark.
    pub fn is_x_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    /// Player to place the next mark.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.current_move)
    }

    /// Winner and winning line on the current board.
    pub fn winner(&self) -> Option<WinResult> {
        rules::evaluate(self.current_board())
    }

    /// Status of the current board.
    pub fn status(&self) -> GameStatus {
        GameStatus::of(self.current_board(), self.to_move())
    }

    /// Plays the current player's mark at a board index (0-8).
    ///
    /// Off-board indices are ignored like any other invalid request.
    pub fn play(&mut self, index: usize) -> PlayOutcome {
        match Position::from_index(index) {
            Some(pos) => self.play_at(pos),
            None => {
                debug!(index, "Ignoring play off the board");
                PlayOutcome::Ignored(Rejection::OutOfBounds(index))
            }
        }
    }

    /// Plays the current player's mark at `pos`.
    ///
    /// No-op when the current board already has a winner or `pos` is taken.
    /// Otherwise any steps after the current one are discarded before the
    /// new board is appended.
    #[instrument(skip(self), fields(step = self.current_move, player = %self.to_move()))]
    pub fn play_at(&mut self, pos: Position) -> PlayOutcome {
        let board = *self.current_board();

        if rules::evaluate(&board).is_some() {
            debug!("Ignoring play after a win");
            return PlayOutcome::Ignored(Rejection::GameOver);
        }
        if !board.is_empty(pos) {
            debug!("Ignoring play on an occupied square");
            return PlayOutcome::Ignored(Rejection::SquareOccupied(pos));
        }

        let mv = Move::new(self.to_move(), pos);
        let discarded = self.history.len() - (self.current_move + 1);
        if discarded > 0 {
            debug!(discarded, "Branching: dropping future steps");
        }
        self.history.truncate(self.current_move + 1);
        self.moves.truncate(self.current_move);

        self.history.push(board.with_mark(pos, mv.player));
        self.moves.push(mv);
        self.current_move = self.history.len() - 1;

        debug_assert!(GameInvariants::check_all(self).is_ok());

        let status = self.status();
        if status.is_over() {
            info!(%status, "Game over");
        } else {
            debug!(%mv, "Move applied");
        }
        PlayOutcome::Placed(mv)
    }

    /// Moves the pointer to `step` without touching the history.
    ///
    /// Returns false (and does nothing) when `step` is out of range.
    #[instrument(skip(self), fields(from = self.current_move))]
    pub fn jump_to(&mut self, step: usize) -> bool {
        if step >= self.history.len() {
            debug!(len = self.history.len(), "Ignoring jump out of range");
            return false;
        }
        self.current_move = step;
        true
    }

    /// Back to a single empty board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(steps = self.history.len(), "Resetting game");
        *self = Self::new();
    }

    /// Jumpable entries for every step, in the requested order.
    pub fn move_list(&self, order: SortOrder) -> Vec<MoveEntry> {
        let entries = (0..self.history.len()).map(|step| {
            let mv = step.checked_sub(1).and_then(|i| self.moves.get(i)).copied();
            MoveEntry::new(step, mv, step == self.current_move)
        });
        match order {
            SortOrder::Ascending => entries.collect(),
            SortOrder::Descending => entries.rev().collect(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn played(moves: &[usize]) -> GameState {
        let mut game = GameState::new();
        for &index in moves {
            assert!(game.play(index).is_placed(), "move {} should apply", index);
        }
        game
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_move(), 0);
        assert!(game.is_x_next());
        assert_eq!(game.status().to_string(), "Next player: X");
    }

    #[test]
    fn test_play_places_current_mark() {
        let mut game = GameState::new();
        let outcome = game.play(4);
        assert_eq!(outcome, PlayOutcome::Placed(Move::new(Player::X, Position::Center)));
        assert_eq!(game.current_board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(game.current_move(), 1);
        assert!(!game.is_x_next());
        assert_eq!(game.status().to_string(), "Next player: O");
    }

    #[test]
    fn test_play_occupied_is_noop() {
        let mut game = played(&[4]);
        let before = game.clone();
        assert_eq!(
            game.play(4),
            PlayOutcome::Ignored(Rejection::SquareOccupied(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_play_off_board_is_noop() {
        let mut game = GameState::new();
        assert_eq!(game.play(9), PlayOutcome::Ignored(Rejection::OutOfBounds(9)));
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_win_scenario() {
        let mut game = played(&[0, 4, 1, 7, 2]);
        assert_eq!(game.status().to_string(), "Winner: X");
        let win = game.winner().expect("X completed the top row");
        assert_eq!(win.indices(), [0, 1, 2]);

        let before = game.clone();
        assert_eq!(game.play(8), PlayOutcome::Ignored(Rejection::GameOver));
        assert_eq!(game, before);
    }

    #[test]
    fn test_draw_scenario() {
        // X O X / X O O / O X X
        let game = played(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(game.status(), GameStatus::Draw);
        assert_eq!(game.status().to_string(), "Draw");
        assert!(game.winner().is_none());
    }

    #[test]
    fn test_jump_to_earlier_step() {
        let mut game = played(&[0, 4, 8]);
        assert!(game.jump_to(1));
        assert_eq!(game.current_board(), &game.history()[1]);
        assert!(!game.is_x_next());
        assert_eq!(game.history().len(), 4);
        assert_eq!(game.moves().len(), 3);
    }

    #[test]
    fn test_jump_out_of_range_is_noop() {
        let mut game = played(&[0]);
        assert!(!game.jump_to(2));
        assert_eq!(game.current_move(), 1);
    }

    #[test]
    fn test_jump_allowed_after_win() {
        let mut game = played(&[0, 4, 1, 7, 2]);
        assert!(game.jump_to(3));
        assert_eq!(game.status().to_string(), "Next player: O");
        assert!(game.play(8).is_placed());
    }

    #[test]
    fn test_play_after_jump_truncates_future() {
        let mut game = played(&[0, 4, 8, 2]);
        game.jump_to(1);
        let outcome = game.play(6);
        assert_eq!(outcome, PlayOutcome::Placed(Move::new(Player::O, Position::BottomLeft)));
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.moves().len(), 2);
        assert_eq!(game.current_move(), 2);
        assert!(game.current_board().is_empty(Position::Center));
        assert!(game.current_board().is_empty(Position::BottomRight));
    }

    #[test]
    fn test_jump_preserves_move_log() {
        let mut game = played(&[0, 4, 8]);
        game.jump_to(0);
        assert_eq!(game.moves().len(), 3);
        assert_eq!(game.moves()[2], Move::new(Player::X, Position::BottomRight));
    }

    #[test]
    fn test_reset() {
        let mut game = played(&[0, 4, 8]);
        game.jump_to(1);
        game.reset();
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_move_list_order_and_current() {
        let mut game = played(&[0, 4]);
        game.jump_to(1);

        let ascending: Vec<String> = game
            .move_list(SortOrder::Ascending)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            ascending,
            vec![
                "Go to game start",
                "You are at move #1 (0, 0)",
                "Go to move #2 (1, 1)",
            ]
        );

        let descending: Vec<usize> = game
            .move_list(SortOrder::Descending)
            .iter()
            .map(|entry| *entry.step())
            .collect();
        assert_eq!(descending, vec![2, 1, 0]);
    }
}
