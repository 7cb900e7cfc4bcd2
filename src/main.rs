//! CARO - unified CLI.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use caro::cli::{Cli, Command};
use caro::{CaroConfig, SortOrder, logging, replay, tui};
use clap::Parser;
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CaroConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command.unwrap_or(Command::Play { descending: false }) {
        Command::Play { descending } => run_play(config, descending),
        Command::Replay {
            moves,
            jump,
            descending,
        } => run_replay(config, &moves, jump, descending),
    }
}

/// Run the interactive terminal game
fn run_play(config: CaroConfig, descending: bool) -> Result<()> {
    let config = if descending {
        config.with_move_order(SortOrder::Descending)
    } else {
        config
    };
    logging::init_file_tracing(&config)?;
    tui::run_tui(&config)
}

/// Apply moves and print the resulting game
#[instrument(skip_all, fields(count = moves.len(), ?jump))]
fn run_replay(config: CaroConfig, moves: &[String], jump: Option<usize>, descending: bool) -> Result<()> {
    logging::init_stderr_tracing(&config);

    let order = if descending {
        SortOrder::Descending
    } else {
        *config.move_order()
    };
    let positions = replay::parse_moves(moves)?;
    info!(moves = positions.len(), "Replaying game");

    let report = replay::replay(&positions, jump, order)?;
    print!("{}", report);
    Ok(())
}
