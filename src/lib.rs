//! Tic-tac-toe rounds - a small rules engine with a session scoreboard.
//!
//! # Architecture
//!
//! - **Engine**: owns the current round and the cumulative score
//! - **Rules**: pure win/draw evaluation over a 3x3 board
//! - **Invariants**: properties checked after every accepted move
//! - **Session**: a line-oriented terminal front end driving the engine
//!
//! # Example
//!
//! ```
//! use tictactoe_rounds::{GameEngine, Outcome, Player, Position};
//!
//! let mut engine = GameEngine::new();
//! let mut last = None;
//! for index in [0, 3, 1, 4, 2] {
//!     let pos = Position::from_index(index).unwrap();
//!     last = engine.apply_move(pos).outcome();
//! }
//! assert_eq!(last, Some(Outcome::Won(Player::X)));
//! assert_eq!(engine.score().wins(Player::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod alert;
mod config;
mod engine;
mod outcome;
mod position;
mod session;
mod types;

pub mod invariants;
pub mod rules;

// Crate-level exports - Domain types
pub use position::Position;
pub use types::{Board, Cell, GameState, GameStatus, Player};

// Crate-level exports - Engine
pub use engine::{GameEngine, MoveRejection, MoveResult, Snapshot};
pub use outcome::{Outcome, Score, ScoreKey};

// Crate-level exports - Presentation helpers
pub use alert::{Alert, AlertLevel, turn_label};
pub use session::{Command, TerminalSession, replay};

// Crate-level exports - Configuration
pub use config::{ConfigError, PlayConfig};

// Crate-level exports - Invariants
pub use invariants::{Invariant, InvariantSet, InvariantViolation, RoundInvariants};
