//! Replay invariant: the board is exactly what the history produces.

use super::Invariant;
use crate::board::Board;
use crate::state::GameState;

/// Invariant: replaying the committed moves onto a fresh board reproduces
/// the current board.
pub struct HistoryReplayInvariant;

impl Invariant<GameState> for HistoryReplayInvariant {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = Board::new();
        for play in state.history().plays() {
            reconstructed.apply(play.mv());
        }
        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board is reconstructible by replaying the move history"
    }
}
