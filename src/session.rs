//! Line-oriented terminal front end.
//!
//! Translates typed commands into engine calls and renders the board,
//! turn indicator, alert banner and scoreboard after each one. Reading
//! and writing go through `BufRead`/`Write`, so a session can be driven
//! from stdin or from a script.

use crate::alert::{Alert, turn_label};
use crate::config::PlayConfig;
use crate::engine::{GameEngine, Snapshot};
use crate::position::Position;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument, warn};

const HELP: &str = "Commands: a cell index (0-8) or label, `reset`, `score`, `help`, `quit`";

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Mark a cell.
    Move(Position),
    /// Start a new round.
    Reset,
    /// Print the scoreboard.
    Score,
    /// Print the command summary.
    Help,
    /// End the session.
    Quit,
}

impl Command {
    /// Parses one line of input. Blank or unknown input yields `None`.
    #[instrument]
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "" => None,
            "r" | "reset" => Some(Command::Reset),
            "s" | "score" => Some(Command::Score),
            "h" | "help" | "?" => Some(Command::Help),
            "q" | "quit" | "exit" => Some(Command::Quit),
            other => Position::from_label_or_number(other).map(Command::Move),
        }
    }
}

/// Interactive session over a reader and a writer.
pub struct TerminalSession<R, W> {
    engine: GameEngine,
    config: PlayConfig,
    input: R,
    output: W,
    alert: Option<Alert>,
}

impl<R: BufRead, W: Write> TerminalSession<R, W> {
    /// Creates a session with a fresh engine.
    pub fn new(config: PlayConfig, input: R, output: W) -> Self {
        Self {
            engine: GameEngine::new(),
            config,
            input,
            output,
            alert: None,
        }
    }

    /// Runs until `quit` or end of input, then returns the final snapshot.
    #[instrument(skip(self))]
    pub fn run(mut self) -> io::Result<Snapshot> {
        info!("Session started");
        self.render()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }

            match Command::parse(&line) {
                Some(Command::Quit) => break,
                Some(command) => self.handle(command)?,
                None if line.trim().is_empty() => {}
                None => writeln!(self.output, "Unrecognized input. {}", HELP)?,
            }
        }

        info!(score = %self.engine.score(), "Session ended");
        Ok(self.engine.snapshot())
    }

    fn handle(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Move(pos) => {
                let result = self.engine.apply_move(pos);
                if let Some(reason) = result.rejection() {
                    // Rejected moves are ignored; the board is redrawn unchanged.
                    debug!(%reason, "Ignoring move");
                }
                if let Some(outcome) = result.outcome() {
                    self.alert = Some(Alert::for_outcome(outcome));
                }
                self.render()
            }
            Command::Reset => {
                self.engine.reset_round();
                self.alert = None;
                self.render()
            }
            Command::Score => writeln!(self.output, "Score  {}", self.engine.score()),
            Command::Help => writeln!(self.output, "{}", HELP),
            Command::Quit => Ok(()),
        }
    }

    fn render(&mut self) -> io::Result<()> {
        let state = self.engine.state();
        writeln!(
            self.output,
            "\n{}\n",
            state.board().display(*self.config.show_coordinates())
        )?;
        match &self.alert {
            Some(alert) => writeln!(self.output, "{}", alert)?,
            None => writeln!(self.output, "{}", turn_label(state.current_player()))?,
        }
        writeln!(self.output, "Score  {}", self.engine.score())
    }
}

/// Plays `indices` in order on a fresh engine and returns the final snapshot.
///
/// Indices outside 0-8 and rejected moves are skipped with a warning.
#[instrument]
pub fn replay(indices: &[usize]) -> Snapshot {
    let mut engine = GameEngine::new();
    for &index in indices {
        let Some(pos) = Position::from_index(index) else {
            warn!(index, "Skipping out-of-range cell index");
            continue;
        };
        if let Some(reason) = engine.apply_move(pos).rejection() {
            warn!(index, %reason, "Skipping rejected move");
        }
    }
    engine.snapshot()
}
