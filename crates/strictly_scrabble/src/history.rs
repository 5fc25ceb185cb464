//! Committed moves, in commit order.

use super::geometry::Move;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Who made a committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
pub enum MoveType {
    /// The player the solver works for.
    Own,
    /// Any other player.
    Opponent,
}

/// A committed move and who played it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Play {
    /// Who played it.
    player: MoveType,
    /// The move itself.
    #[serde(rename = "move")]
    mv: Move,
}

/// Every committed move.
///
/// A single log preserves the interleaving of both players so the board can
/// be rebuilt by replay; [`MoveHistory::own`] and [`MoveHistory::opponent`]
/// give the per-player views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    plays: Vec<Play>,
}

impl MoveHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a committed move.
    pub fn record(&mut self, play: Play) {
        self.plays.push(play);
    }

    /// Every play in commit order.
    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    /// Own moves in commit order.
    pub fn own(&self) -> impl Iterator<Item = &Move> {
        self.by(MoveType::Own)
    }

    /// Opponent moves in commit order.
    pub fn opponent(&self) -> impl Iterator<Item = &Move> {
        self.by(MoveType::Opponent)
    }

    fn by(&self, player: MoveType) -> impl Iterator<Item = &Move> {
        self.plays
            .iter()
            .filter(move |play| play.player == player)
            .map(|play| &play.mv)
    }

    /// True if the exact word-and-endpoints triple was already played by anyone.
    pub fn contains(&self, mv: &Move) -> bool {
        self.plays.iter().any(|play| &play.mv == mv)
    }

    /// Number of committed moves.
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    /// True before the first commit.
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }
}
