//! Session state: the board plus the history of committed moves.

use super::board::Board;
use super::geometry::Move;
use super::history::{MoveHistory, MoveType, Play};
use super::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Error produced when a serialized session breaks a game-state invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Game state is inconsistent: {}", descriptions.join("; "))]
pub struct InvalidState {
    /// Description of every violated invariant.
    pub descriptions: Vec<String>,
}

impl std::error::Error for InvalidState {}

/// Everything that persists between turns.
///
/// Created once per session and mutated only by [`GameState::commit_move`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StateRecord")]
pub struct GameState {
    pub(crate) board: Board,
    history: MoveHistory,
}

impl GameState {
    /// Creates a session with an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a session by committing `plays` in order.
    #[instrument(skip(plays), fields(count = plays.len()))]
    pub fn replay(plays: &[Play]) -> Self {
        let mut state = Self::new();
        for play in plays {
            state.commit_move(play.mv().clone(), *play.player());
        }
        state
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Committed moves.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Writes `mv` onto the board and records it under `player`.
    ///
    /// The move is assumed to be well-formed (guaranteed by [`Move`]) and
    /// already chosen; no legality check happens here.
    #[instrument(skip(self, mv, player), fields(mv = %mv, player = %player))]
    pub fn commit_move(&mut self, mv: Move, player: MoveType) {
        self.board.apply(&mv);
        self.history.record(Play::new(player, mv));
        info!(
            tiles = self.board.tile_count(),
            moves = self.history.len(),
            "Move committed"
        );

        #[cfg(debug_assertions)]
        if let Err(violations) = self.check_invariants() {
            for violation in &violations {
                tracing::warn!(description = %violation.description, "Invariant violated after commit");
            }
        }
    }

    /// Checks every game-state invariant.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        GameInvariants::check_all(self)
    }
}

/// Serialized shape of a [`GameState`], checked before it becomes one.
#[derive(Debug, Clone, Deserialize)]
struct StateRecord {
    board: Board,
    history: MoveHistory,
}

impl TryFrom<StateRecord> for GameState {
    type Error = InvalidState;

    fn try_from(record: StateRecord) -> Result<Self, Self::Error> {
        let state = Self {
            board: record.board,
            history: record.history,
        };
        state.check_invariants().map_err(|violations| InvalidState {
            descriptions: violations.into_iter().map(|v| v.description).collect(),
        })?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SquareKind;
    use crate::position::Position;

    #[test]
    fn test_commit_writes_board_and_history() {
        let mut state = GameState::new();
        state.commit_move("cat 7h 9h".parse().unwrap(), MoveType::Opponent);

        assert_eq!(state.board().contents(Position::CENTER), Some('A'));
        assert_eq!(state.history().opponent().count(), 1);
        assert_eq!(state.history().own().count(), 0);
        assert_eq!(state.board().square_kind(Position::CENTER), SquareKind::Normal);
    }

    #[test]
    fn test_replay_reconstructs_state() {
        let mut state = GameState::new();
        state.commit_move("cat 7h 9h".parse().unwrap(), MoveType::Opponent);
        state.commit_move("cot 7h 7j".parse().unwrap(), MoveType::Own);

        let replayed = GameState::replay(state.history().plays());
        assert_eq!(replayed, state);
        assert!(replayed.check_invariants().is_ok());
    }

    #[test]
    fn test_deserialize_round_trip() {
        let mut state = GameState::new();
        state.commit_move("cat 7h 9h".parse().unwrap(), MoveType::Opponent);
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_deserialize_rejects_truncated_board() {
        let json = r#"{"board":{"cells":[],"placed_letters":[]},"history":{"plays":[]}}"#;
        let err = serde_json::from_str::<GameState>(json).unwrap_err();
        assert!(err.to_string().contains("Board has 0 cells"));
    }

    #[test]
    fn test_deserialize_rejects_board_history_mismatch() {
        let mut state = GameState::new();
        state.commit_move("cat 7h 9h".parse().unwrap(), MoveType::Opponent);
        let mut value = serde_json::to_value(&state).unwrap();
        value["history"]["plays"] = serde_json::json!([]);

        let err = serde_json::from_value::<GameState>(value).unwrap_err();
        assert!(err.to_string().contains("replaying the move history"));
    }
}
