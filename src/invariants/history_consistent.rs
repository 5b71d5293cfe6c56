//! History consistency invariant: history length matches marked cells.

use super::Invariant;
use crate::GameState;
use std::collections::HashSet;

/// Invariant: every history entry names a distinct cell, and the history
/// is exactly as long as the number of marked cells.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        let distinct: HashSet<_> = history.iter().collect();

        distinct.len() == history.len() && history.len() == state.board().occupied()
    }

    fn description() -> &'static str {
        "History length matches number of marked cells"
    }
}
