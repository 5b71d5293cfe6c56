//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::{Board, Cell, GameState, Player};

/// Invariant: board cells are monotonic (never overwritten).
///
/// Replays the move history from an empty board, X first and alternating.
/// Every replayed move must land on an empty cell, and the result must
/// match the current board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = Board::new();
        let mut player = Player::X;

        for &pos in state.history() {
            if !reconstructed.is_empty(pos) {
                return false;
            }
            reconstructed.set(pos, Cell::Occupied(player));
            player = player.opponent();
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
