//! Single-middle invariant: at most one Middle square, at the centre.

use super::Invariant;
use crate::board::SquareKind;
use crate::position::Position;
use crate::state::GameState;

/// Invariant: the only square that may be [`SquareKind::Middle`] is the
/// centre, and it stays Middle only while empty.
pub struct SingleMiddleInvariant;

impl Invariant<GameState> for SingleMiddleInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let middles: Vec<Position> = Position::all()
            .filter(|&pos| board.square_kind(pos) == SquareKind::Middle)
            .collect();
        match middles.as_slice() {
            [] => !board.is_empty(Position::CENTER),
            [only] => *only == Position::CENTER && board.is_empty(Position::CENTER),
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Exactly one Middle square exists at the centre until it is covered"
    }
}
