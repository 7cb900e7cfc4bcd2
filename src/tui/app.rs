//! Application state and logic.

use super::input::{Action, move_cursor};
use caro_tictactoe::{GameState, PlayOutcome, Position, SortOrder};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// Owns the one game session; every key press is applied here in order.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Position,
    order: SortOrder,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application with an empty game.
    pub fn new(order: SortOrder) -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            order,
            message: None,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Square under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Display order of the move list.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Feedback about the last ignored action, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns true once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one user action.
    #[instrument(skip(self), fields(step = self.game.current_move()))]
    pub fn apply(&mut self, action: Action) {
        debug!(?action, "Handling action");
        self.message = None;

        match action {
            Action::MoveCursor(key) => self.cursor = move_cursor(self.cursor, key),
            Action::PlayCursor => self.play(self.cursor),
            Action::PlayAt(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            Action::StepBack => {
                if let Some(step) = self.game.current_move().checked_sub(1) {
                    self.game.jump_to(step);
                }
            }
            Action::StepForward => {
                if !self.game.jump_to(self.game.current_move() + 1) {
                    self.message = Some("Already at the latest move".to_string());
                }
            }
            Action::JumpStart => {
                self.game.jump_to(0);
            }
            Action::ToggleOrder => {
                self.order = self.order.toggle();
                debug!(order = ?self.order, "Move list order toggled");
            }
            Action::Reset => {
                self.game.reset();
                self.cursor = Position::Center;
            }
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn play(&mut self, pos: Position) {
        if let PlayOutcome::Ignored(reason) = self.game.play_at(pos) {
            self.message = Some(reason.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caro_tictactoe::{Player, Square};
    use crossterm::event::KeyCode;

    #[test]
    fn test_cursor_play() {
        let mut app = App::new(SortOrder::Ascending);
        app.apply(Action::MoveCursor(KeyCode::Up));
        app.apply(Action::PlayCursor);
        assert_eq!(
            app.game().current_board().get(Position::TopCenter),
            Square::Occupied(Player::X)
        );
        assert_eq!(app.message(), None);
    }

    #[test]
    fn test_occupied_square_sets_message() {
        let mut app = App::new(SortOrder::Ascending);
        app.apply(Action::PlayAt(Position::Center));
        app.apply(Action::PlayAt(Position::Center));
        assert_eq!(app.message(), Some("Square Center is already occupied"));
        assert_eq!(app.game().current_move(), 1);
    }

    #[test]
    fn test_step_navigation() {
        let mut app = App::new(SortOrder::Ascending);
        for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
            app.apply(Action::PlayAt(pos));
        }
        app.apply(Action::StepBack);
        app.apply(Action::StepBack);
        assert_eq!(app.game().current_move(), 1);
        app.apply(Action::StepForward);
        assert_eq!(app.game().current_move(), 2);
        app.apply(Action::JumpStart);
        assert_eq!(app.game().current_move(), 0);
        app.apply(Action::StepBack);
        assert_eq!(app.game().current_move(), 0);
    }

    #[test]
    fn test_step_forward_at_end() {
        let mut app = App::new(SortOrder::Ascending);
        app.apply(Action::StepForward);
        assert_eq!(app.message(), Some("Already at the latest move"));
    }

    #[test]
    fn test_toggle_reset_quit() {
        let mut app = App::new(SortOrder::Descending);
        app.apply(Action::ToggleOrder);
        assert_eq!(app.order(), SortOrder::Ascending);

        app.apply(Action::PlayAt(Position::TopLeft));
        app.apply(Action::Reset);
        assert_eq!(app.game(), &GameState::new());
        assert_eq!(app.cursor(), Position::Center);

        assert!(!app.should_quit());
        app.apply(Action::Quit);
        assert!(app.should_quit());
    }
}
