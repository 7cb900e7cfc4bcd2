//! Key bindings and cursor movement for keyboard navigation.

use caro_tictactoe::Position;
use crossterm::event::KeyCode;

/// A user action in the terminal game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor with an arrow key.
    MoveCursor(KeyCode),
    /// Play at the cursor.
    PlayCursor,
    /// Play at a square picked by number key.
    PlayAt(Position),
    /// Jump one step back in history.
    StepBack,
    /// Jump one step forward in history.
    StepForward,
    /// Jump to the empty starting board.
    JumpStart,
    /// Flip the move list order.
    ToggleOrder,
    /// Start a new game.
    Reset,
    /// Leave the game.
    Quit,
}

/// Maps a key to an action.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::MoveCursor(key))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayCursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(Action::PlayAt),
        KeyCode::Char('[') => Some(Action::StepBack),
        KeyCode::Char(']') => Some(Action::StepForward),
        KeyCode::Char('g') => Some(Action::JumpStart),
        KeyCode::Char('s') => Some(Action::ToggleOrder),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = cursor.coordinates();
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => (row + 1, col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, col + 1),
        _ => (row, col),
    };
    Position::from_coordinates(row, col).unwrap_or(cursor)
}
