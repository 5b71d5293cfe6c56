//! Round outcomes and the session scoreboard.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a concluded round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a triple.
    Won(Player),
    /// Board filled with no triple.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Scoreboard column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum ScoreKey {
    /// Rounds won by X.
    X,
    /// Rounds won by O.
    O,
    /// Drawn rounds.
    Draw,
}

impl From<Outcome> for ScoreKey {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won(Player::X) => ScoreKey::X,
            Outcome::Won(Player::O) => ScoreKey::O,
            Outcome::Draw => ScoreKey::Draw,
        }
    }
}

/// Cumulative tally of concluded rounds for one session.
///
/// Counters only ever go up; starting a new round leaves them alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    x: u32,
    o: u32,
    draw: u32,
}

impl Score {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the counter for `key`.
    pub fn get(&self, key: ScoreKey) -> u32 {
        match key {
            ScoreKey::X => self.x,
            ScoreKey::O => self.o,
            ScoreKey::Draw => self.draw,
        }
    }

    /// Rounds won by `player`.
    pub fn wins(&self, player: Player) -> u32 {
        self.get(ScoreKey::from(Outcome::Won(player)))
    }

    /// Drawn rounds.
    pub fn draws(&self) -> u32 {
        self.draw
    }

    /// Total concluded rounds.
    pub fn rounds_played(&self) -> u32 {
        self.x + self.o + self.draw
    }

    /// Counts a concluded round.
    pub(crate) fn record(&mut self, outcome: Outcome) {
        let counter = match ScoreKey::from(outcome) {
            ScoreKey::X => &mut self.x,
            ScoreKey::O => &mut self.o,
            ScoreKey::Draw => &mut self.draw,
        };
        *counter = counter.saturating_add(1);
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X: {}  O: {}  Draw: {}", self.x, self.o, self.draw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_score_is_zero() {
        let score = Score::new();
        for key in <ScoreKey as strum::IntoEnumIterator>::iter() {
            assert_eq!(score.get(key), 0);
        }
        assert_eq!(score.rounds_played(), 0);
    }

    #[test]
    fn test_record_increments_only_matching_key() {
        let mut score = Score::new();
        score.record(Outcome::Won(Player::O));
        score.record(Outcome::Won(Player::O));
        score.record(Outcome::Draw);

        assert_eq!(score.wins(Player::X), 0);
        assert_eq!(score.wins(Player::O), 2);
        assert_eq!(score.draws(), 1);
        assert_eq!(score.rounds_played(), 3);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Won(Player::X).to_string(), "Player X wins");
        assert_eq!(Outcome::Draw.to_string(), "Draw");
        assert_eq!(Outcome::Draw.winner(), None);
    }
}
