//! Pure tic-tac-toe game logic with time travel.
//!
//! - [`rules::evaluate`] checks a board against the 8 winning lines.
//! - [`GameState`] keeps every board snapshot and a pointer into them, so a
//!   game can jump back to an earlier step and branch from there.
//!
//! ```
//! use caro_tictactoe::{GameState, SortOrder};
//!
//! let mut game = GameState::new();
//! for index in [0, 4, 1, 7, 2] {
//!     game.play(index);
//! }
//! assert_eq!(game.status().to_string(), "Winner: X");
//!
//! game.jump_to(1);
//! assert!(!game.is_x_next());
//! assert_eq!(game.move_list(SortOrder::Ascending).len(), 6);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod move_list;
mod position;
pub mod rules;
mod status;
mod types;

pub use action::{Move, PlayOutcome, Rejection};
pub use game::GameState;
pub use move_list::{MoveEntry, SortOrder};
pub use position::Position;
pub use rules::{WinResult, evaluate};
pub use status::GameStatus;
pub use types::{Board, Player, Square};

/// Alias for clarity where the symbol rather than the participant matters.
pub type Mark = Player;
