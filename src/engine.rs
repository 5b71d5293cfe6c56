//! The game engine: one round at a time, one scoreboard per session.

use crate::invariants::{InvariantSet, RoundInvariants};
use crate::outcome::{Outcome, Score};
use crate::position::Position;
use crate::rules;
use crate::types::GameState;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Why a move was turned away.
///
/// A rejected move leaves the engine untouched, so this is reported as a
/// value inside [`MoveResult`] rather than an error to propagate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveRejection {
    /// The target cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The round has concluded; only a reset accepts play again.
    #[display("Round is already over ({})", _0)]
    RoundOver(Outcome),
}

impl std::error::Error for MoveRejection {}

/// Result of [`GameEngine::apply_move`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    /// The mark was placed.
    Accepted {
        /// State after the move.
        state: GameState,
        /// Set when this move concluded the round.
        outcome: Option<Outcome>,
    },
    /// The move was ignored.
    Rejected {
        /// Unchanged state.
        state: GameState,
        /// Why the move was ignored.
        reason: MoveRejection,
    },
}

impl MoveResult {
    /// State after the call, whether or not the move was taken.
    pub fn state(&self) -> &GameState {
        match self {
            MoveResult::Accepted { state, .. } | MoveResult::Rejected { state, .. } => state,
        }
    }

    /// The outcome event, if this move ended the round.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            MoveResult::Accepted { outcome, .. } => *outcome,
            MoveResult::Rejected { .. } => None,
        }
    }

    /// Returns true if the mark was placed.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveResult::Accepted { .. })
    }

    /// The rejection reason, if the move was ignored.
    pub fn rejection(&self) -> Option<MoveRejection> {
        match self {
            MoveResult::Accepted { .. } => None,
            MoveResult::Rejected { reason, .. } => Some(*reason),
        }
    }
}

/// Everything a presentation layer needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Current round.
    state: GameState,
    /// Session scoreboard.
    score: Score,
}

/// Tic-tac-toe engine owning the current round and the session score.
///
/// All operations are synchronous and run to completion; the caller owns
/// the engine and drives it from its own event loop.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
    score: Score,
}

impl GameEngine {
    /// Starts a session: empty board, X to move, zeroed score.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current round state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the session scoreboard.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Returns a copy of the round state and scoreboard.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state.clone(),
            score: self.score,
        }
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Moves onto a marked cell, or after the round has concluded, are
    /// rejected and change nothing. An accepted move is followed by a
    /// board evaluation; a concluding move records the outcome on the
    /// scoreboard, otherwise the turn passes to the other player.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn apply_move(&mut self, pos: Position) -> MoveResult {
        if let Some(reason) = self.check_move(pos) {
            debug!(%reason, "Move rejected");
            return MoveResult::Rejected {
                state: self.state.clone(),
                reason,
            };
        }

        self.state.place(pos);
        let status = rules::evaluate(self.state.board());

        let outcome = status.outcome();
        if outcome.is_none() {
            self.state.toggle_player();
        }
        self.state.set_status(status);

        if let Some(outcome) = outcome {
            self.score.record(outcome);
            info!(%outcome, score = %self.score, "Round concluded");
        }

        debug_assert!(
            RoundInvariants::check_all(&self.state).is_ok(),
            "Round invariants violated after accepted move"
        );

        MoveResult::Accepted {
            state: self.state.clone(),
            outcome,
        }
    }

    /// Clears the board for a new round with X to move. The score is kept.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) -> GameState {
        self.state = GameState::new();
        info!(rounds_played = self.score.rounds_played(), "Round reset");
        self.state.clone()
    }

    fn check_move(&self, pos: Position) -> Option<MoveRejection> {
        if let Some(outcome) = self.state.status().outcome() {
            Some(MoveRejection::RoundOver(outcome))
        } else if !self.state.board().is_empty(pos) {
            Some(MoveRejection::CellOccupied(pos))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameStatus, Player};

    #[test]
    fn test_first_move_passes_turn() {
        let mut engine = GameEngine::new();
        let result = engine.apply_move(Position::Center);

        assert!(result.is_accepted());
        assert_eq!(result.outcome(), None);
        assert_eq!(result.state().current_player(), Player::O);
    }

    #[test]
    fn test_rejection_reports_reason() {
        let mut engine = GameEngine::new();
        engine.apply_move(Position::Center);
        let result = engine.apply_move(Position::Center);

        assert_eq!(
            result.rejection(),
            Some(MoveRejection::CellOccupied(Position::Center))
        );
        assert_eq!(
            MoveRejection::CellOccupied(Position::Center).to_string(),
            "Center is already occupied"
        );
    }

    #[test]
    fn test_winning_move_keeps_winner_as_current_player() {
        let mut engine = GameEngine::new();
        for pos in [0, 3, 1, 4, 2].map(|i| Position::from_index(i).unwrap()) {
            engine.apply_move(pos);
        }
        assert_eq!(engine.state().current_player(), Player::X);
        assert_eq!(engine.state().status(), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_snapshot_matches_engine() {
        let mut engine = GameEngine::new();
        engine.apply_move(Position::TopLeft);
        let snapshot = engine.snapshot();

        assert_eq!(snapshot.state(), engine.state());
        assert_eq!(snapshot.score(), engine.score());
    }
}
