//! Non-interactive replay: apply moves, print the resulting game.

use caro_tictactoe::{GameState, PlayOutcome, Position, SortOrder};
use derive_more::{Display, Error};
use std::fmt::Write;
use tracing::{debug, instrument, warn};

/// Malformed replay input.
#[derive(Debug, Clone, Display, Error)]
#[display("Replay error: {} at {}:{}", message, file, line)]
pub struct ReplayError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ReplayError {
    /// Creates a new replay error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Splits arguments on commas and whitespace and parses each token as a
/// position index or label.
#[instrument]
pub fn parse_moves(args: &[String]) -> Result<Vec<Position>, ReplayError> {
    args.iter()
        .flat_map(|arg| arg.split(|c: char| c == ',' || c.is_whitespace()))
        .filter(|token| !token.is_empty())
        .map(|token| {
            Position::from_label_or_number(token)
                .ok_or_else(|| ReplayError::new(format!("Unknown position: {}", token)))
        })
        .collect()
}

/// Plays `moves` from a fresh game, optionally jumps, and renders a report.
///
/// Rejected moves are listed in the report rather than aborting the replay.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn replay(moves: &[Position], jump: Option<usize>, order: SortOrder) -> Result<String, ReplayError> {
    let mut game = GameState::new();
    let mut out = String::new();

    for &pos in moves {
        match game.play_at(pos) {
            PlayOutcome::Placed(mv) => {
                debug!(%mv, "Replayed move");
                push_line(&mut out, format_args!("Played: {}", mv))?;
            }
            PlayOutcome::Ignored(reason) => {
                warn!(%pos, %reason, "Replay move ignored");
                push_line(&mut out, format_args!("Ignored: {}", reason))?;
            }
        }
    }

    if let Some(step) = jump {
        if game.jump_to(step) {
            push_line(&mut out, format_args!("Jumped to move #{}", step))?;
        } else {
            push_line(
                &mut out,
                format_args!("Ignored: no move #{} (history has {})", step, game.history().len()),
            )?;
        }
    }

    push_line(&mut out, format_args!("\n{}\n", game.current_board().display()))?;
    push_line(&mut out, format_args!("{}", game.status()))?;
    if let Some(win) = game.winner() {
        let [a, b, c] = win.indices();
        push_line(&mut out, format_args!("Winning line: {}, {}, {}", a, b, c))?;
    }

    push_line(&mut out, format_args!("\nMoves ({}):", order.label()))?;
    for entry in game.move_list(order) {
        push_line(&mut out, format_args!("  {}", entry))?;
    }

    Ok(out)
}

fn push_line(out: &mut String, args: std::fmt::Arguments<'_>) -> Result<(), ReplayError> {
    out.write_fmt(args)
        .and_then(|()| out.write_char('\n'))
        .map_err(|e| ReplayError::new(format!("Failed to format report: {}", e)))
}
