//! Mark balance invariant: X leads O by at most one mark.

use super::Invariant;
use crate::{GameState, Player};
use tracing::warn;

/// Invariant: the board holds as many X's as O's, or one more X.
///
/// X always opens a round and turns alternate, so O can never be ahead.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x_count = state.board().count(Player::X);
        let o_count = state.board().count(Player::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X leads O by zero or one mark"
    }
}
