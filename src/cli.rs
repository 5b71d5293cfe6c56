//! Command-line interface for the `tictactoe` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal, with a running scoreboard.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with a session scoreboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play,

    /// Apply cell indices (0-8) in order and print the result
    Replay {
        /// Cell indices, X first
        #[arg(required = true)]
        positions: Vec<usize>,

        /// Print the final snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}
