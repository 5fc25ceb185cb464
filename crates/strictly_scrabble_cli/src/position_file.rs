//! Position files: the current rack and every move committed so far.
//!
//! ```toml
//! rack = "QWE_RTY"
//!
//! [[moves]]
//! player = "opponent"
//! play = "hello 4h 8h"
//! ```

use crate::config::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_scrabble::{Dictionary, GameState, Move, MoveType, Play, Rack};
use tracing::{debug, info, instrument};

/// One committed move as written in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MoveEntry {
    /// Who played it.
    player: MoveType,
    /// Move notation, e.g. `hello 1a 5a`.
    play: String,
}

/// The raw file contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct PositionFile {
    /// Tiles on the player's rack; `_` is a blank.
    #[serde(default)]
    rack: Rack,
    /// Committed moves in play order.
    #[serde(default)]
    moves: Vec<MoveEntry>,
}

/// A rebuilt game ready for searching.
#[derive(Debug, Clone, Getters)]
pub struct LoadedPosition {
    /// Board and history after replaying every move.
    state: GameState,
    /// The player's rack.
    rack: Rack,
}

impl PositionFile {
    /// Reads and parses a position file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read position file: {}", e)))?;
        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse position file: {}", e)))
    }

    /// Parses every move, checks each word against `dictionary`, and replays
    /// them onto a fresh board.
    ///
    /// Moves are only committed once all of them have been vetted.
    #[instrument(skip(self, dictionary), fields(moves = self.moves.len(), rack = %self.rack))]
    pub fn load<D: Dictionary + ?Sized>(
        &self,
        dictionary: &D,
    ) -> Result<LoadedPosition, ConfigError> {
        let mut plays = Vec::with_capacity(self.moves.len());
        for (index, entry) in self.moves.iter().enumerate() {
            let mv: Move = entry.play.parse().map_err(|e| {
                ConfigError::new(format!("Move {} '{}' is malformed: {}", index + 1, entry.play, e))
            })?;
            if !dictionary.is_valid_word(mv.word()) {
                return Err(ConfigError::new(format!(
                    "Move {} '{}' does not spell a known word",
                    index + 1,
                    entry.play
                )));
            }
            debug!(mv = %mv, player = %entry.player, "Move vetted");
            plays.push(Play::new(entry.player, mv));
        }

        let state = GameState::replay(&plays);
        info!(tiles = state.board().tile_count(), "Position rebuilt");
        Ok(LoadedPosition {
            state,
            rack: self.rack.clone(),
        })
    }
}
