//! Tic-tac-toe rounds - terminal front end.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_rounds::{Alert, PlayConfig, TerminalSession, replay, turn_label};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = PlayConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    initialize_tracing(&config);

    match cli.command {
        Command::Play => run_play(config),
        Command::Replay { positions, json } => run_replay(&config, &positions, json),
    }
}

/// Logs go to stderr so they never interleave with the board.
fn initialize_tracing(config: &PlayConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run an interactive session on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: PlayConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let snapshot = TerminalSession::new(config, stdin.lock(), stdout.lock())
        .run()
        .context("Terminal session failed")?;
    info!(score = %snapshot.score(), "Goodbye");
    Ok(())
}

/// Replay a scripted sequence of moves
#[instrument(skip(config))]
fn run_replay(config: &PlayConfig, positions: &[usize], json: bool) -> Result<()> {
    let snapshot = replay(positions);

    if json {
        let rendered =
            serde_json::to_string_pretty(&snapshot).context("Failed to serialize snapshot")?;
        println!("{}", rendered);
        return Ok(());
    }

    let state = snapshot.state();
    println!("{}\n", state.board().display(*config.show_coordinates()));
    match state.status().outcome() {
        Some(outcome) => println!("{}", Alert::for_outcome(outcome)),
        None => println!("{}", turn_label(state.current_player())),
    }
    println!("Score  {}", snapshot.score());
    Ok(())
}
