//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines: rows, then columns, then diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: who owns it and which squares form it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct WinResult {
    /// Mark filling the line.
    mark: Player,
    /// The three squares of the line, in table order.
    line: [Position; 3],
}

impl WinResult {
    /// Returns true if `pos` is one of the winning squares.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }

    /// The winning line as raw board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }
}

/// Evaluates the board against every winning line.
///
/// The first line in [`WINNING_LINES`] order whose three squares hold the
/// same mark wins. Draw detection is separate, see [`super::is_draw`].
#[instrument(level = "trace", skip(board))]
pub fn evaluate(board: &Board) -> Option<WinResult> {
    WINNING_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match board.get(a) {
            Square::Occupied(mark) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some(WinResult { mark, line })
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    evaluate(board).map(|win| win.mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for &(pos, player) in marks {
            board.set(pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::Center, Player::O),
            (Position::BottomCenter, Player::O),
        ]);
        let win = evaluate(&board).expect("top row is complete");
        assert_eq!(*win.mark(), Player::X);
        assert_eq!(win.indices(), [0, 1, 2]);
    }

    #[test]
    fn test_winner_column() {
        let board = board_with(&[
            (Position::TopRight, Player::O),
            (Position::MiddleRight, Player::O),
            (Position::BottomRight, Player::O),
        ]);
        let win = evaluate(&board).expect("right column is complete");
        assert_eq!(*win.mark(), Player::O);
        assert_eq!(win.indices(), [2, 5, 8]);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Player::X),
            (Position::Center, Player::X),
            (Position::BottomLeft, Player::X),
        ]);
        let win = evaluate(&board).expect("diagonal is complete");
        assert_eq!(win.indices(), [2, 4, 6]);
        assert!(win.contains(Position::Center));
        assert!(!win.contains(Position::TopLeft));
    }

    #[test]
    fn test_every_line_detected() {
        for line in WINNING_LINES {
            let board = board_with(&line.map(|pos| (pos, Player::O)));
            let win = evaluate(&board).expect("line should win");
            assert_eq!(*win.line(), line);
            assert_eq!(check_winner(&board), Some(Player::O));
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(Position::TopLeft, Player::X), (Position::TopCenter, Player::X)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_table_order_wins() {
        // Top row and left column both complete; rows come first.
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::X),
            (Position::BottomLeft, Player::X),
        ]);
        assert_eq!(evaluate(&board).map(|w| w.indices()), Some([0, 1, 2]));
    }
}
