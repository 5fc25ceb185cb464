//! Consumed-premium invariant: occupied squares carry no premium.

use super::Invariant;
use crate::position::Position;
use crate::state::GameState;

/// Invariant: every square holding a letter is [`SquareKind::Normal`](crate::SquareKind::Normal).
pub struct ConsumedPremiumInvariant;

impl Invariant<GameState> for ConsumedPremiumInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        Position::all()
            .filter(|&pos| !board.is_empty(pos))
            .all(|pos| !board.square_kind(pos).is_premium())
    }

    fn description() -> &'static str {
        "Occupied squares have consumed their premium"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MoveType;

    #[test]
    fn test_empty_game_holds() {
        assert!(ConsumedPremiumInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_premium_squares_consumed_after_commit() {
        let mut state = GameState::new();
        // 1A is a triple word, 4A a double letter.
        state.commit_move("rain 1a 4a".parse().unwrap(), MoveType::Own);
        assert!(ConsumedPremiumInvariant::holds(&state));
    }
}
