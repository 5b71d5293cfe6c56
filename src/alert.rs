//! Messages for the presentation layer.

use crate::outcome::Outcome;
use crate::types::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Severity of an alert banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum AlertLevel {
    /// A player won.
    #[display("success")]
    Success,
    /// The round was drawn.
    #[display("warning")]
    Warning,
    /// Neutral notice.
    #[display("info")]
    Info,
}

/// Transient banner shown when something noteworthy happens.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct Alert {
    /// Banner severity.
    level: AlertLevel,
    /// Text shown in the banner.
    #[new(into)]
    message: String,
}

impl Alert {
    /// The banner announcing a concluded round.
    pub fn for_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won(player) => Self::new(
                AlertLevel::Success,
                format!("🎉 Player {} wins! Huzzah!", player),
            ),
            Outcome::Draw => Self::new(
                AlertLevel::Warning,
                "🤝 It's a draw! Better luck next time.",
            ),
        }
    }
}

impl std::fmt::Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)
    }
}

/// Turn indicator text.
pub fn turn_label(player: Player) -> String {
    format!("Player {}'s turn", player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_alert() {
        let alert = Alert::for_outcome(Outcome::Won(Player::O));
        assert_eq!(*alert.level(), AlertLevel::Success);
        assert_eq!(alert.message(), "🎉 Player O wins! Huzzah!");
    }

    #[test]
    fn test_draw_alert() {
        let alert = Alert::for_outcome(Outcome::Draw);
        assert_eq!(*alert.level(), AlertLevel::Warning);
        assert_eq!(
            alert.to_string(),
            "[warning] 🤝 It's a draw! Better luck next time."
        );
    }

    #[test]
    fn test_turn_label() {
        assert_eq!(turn_label(Player::X), "Player X's turn");
    }
}
