//! Command-line interface for caro.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CARO - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "caro")]
#[command(about = "Tic-tac-toe in the terminal with a time-travel move list", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (missing file means defaults)
    #[arg(short, long, global = true, default_value = "caro.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Start with the move list in descending order
        #[arg(long)]
        descending: bool,
    },

    /// Apply a sequence of moves and print the resulting game
    Replay {
        /// Positions to play in order: indices 0-8 or labels like "center",
        /// separated by spaces or commas
        #[arg(required = true, num_args = 1..)]
        moves: Vec<String>,

        /// Jump to this history step after playing the moves
        #[arg(long)]
        jump: Option<usize>,

        /// Print the move list latest-first
        #[arg(long)]
        descending: bool,
    },
}
