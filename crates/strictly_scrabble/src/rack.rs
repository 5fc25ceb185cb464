//! The player's tiles.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Maximum number of tiles on a rack.
pub const RACK_SIZE: usize = 7;

/// Character used for a blank tile in rack notation.
pub const BLANK: char = '_';

/// Error produced for an invalid rack.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RackError {
    /// More than seven tiles.
    #[display("Rack holds {count} tiles; the limit is 7")]
    TooManyTiles {
        /// Tiles supplied.
        count: usize,
    },

    /// Something other than a letter or the blank marker.
    #[display("'{tile}' is not a letter or '_'")]
    InvalidTile {
        /// The rejected character.
        tile: char,
    },
}

impl std::error::Error for RackError {}

/// Letters available to the player, plus a number of blanks.
///
/// The engine only reads racks; callers replace them between turns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rack {
    letters: Vec<char>,
    blanks: usize,
}

impl Rack {
    /// Creates a rack from letters and a blank count.
    ///
    /// # Errors
    ///
    /// Returns [`RackError`] for non-letters or more than seven tiles.
    #[instrument(skip(letters))]
    pub fn new(letters: impl IntoIterator<Item = char>, blanks: usize) -> Result<Self, RackError> {
        let mut tiles = Vec::new();
        for tile in letters {
            if !tile.is_ascii_alphabetic() {
                return Err(RackError::InvalidTile { tile });
            }
            tiles.push(tile.to_ascii_uppercase());
        }
        let count = tiles.len() + blanks;
        if count > RACK_SIZE {
            return Err(RackError::TooManyTiles { count });
        }
        Ok(Self {
            letters: tiles,
            blanks,
        })
    }

    /// Lettered tiles, uppercase.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of blank tiles.
    pub fn blank_count(&self) -> usize {
        self.blanks
    }

    /// Total tiles including blanks.
    pub fn len(&self) -> usize {
        self.letters.len() + self.blanks
    }

    /// True if the rack holds no tiles.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if at least one lettered tile matches `letter`.
    pub fn contains(&self, letter: char) -> bool {
        self.count(letter) > 0
    }

    /// Number of lettered tiles matching `letter`.
    pub fn count(&self, letter: char) -> usize {
        let letter = letter.to_ascii_uppercase();
        self.letters.iter().filter(|&&c| c == letter).count()
    }
}

impl FromStr for Rack {
    type Err = RackError;

    /// Parses rack notation such as `QWE_RTY`, where `_` is a blank.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tiles: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        let blanks = tiles.iter().filter(|&&c| c == BLANK).count();
        Self::new(tiles.into_iter().filter(|&c| c != BLANK), blanks)
    }
}

impl std::fmt::Display for Rack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letters: String = self.letters.iter().collect();
        write!(f, "{}{}", letters, BLANK.to_string().repeat(self.blanks))
    }
}

impl TryFrom<String> for Rack {
    type Error = RackError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rack> for String {
    fn from(rack: Rack) -> Self {
        rack.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_counts_blanks() {
        let rack: Rack = "qwe_rt_".parse().unwrap();
        assert_eq!(rack.letters(), &['Q', 'W', 'E', 'R', 'T']);
        assert_eq!(rack.blank_count(), 2);
        assert_eq!(rack.len(), 7);
        assert_eq!(rack.to_string(), "QWERT__");
    }

    #[test]
    fn test_rejects_bad_racks() {
        assert_eq!(
            "abcdefgh".parse::<Rack>(),
            Err(RackError::TooManyTiles { count: 8 })
        );
        assert_eq!(
            "ab1".parse::<Rack>(),
            Err(RackError::InvalidTile { tile: '1' })
        );
    }

    #[test]
    fn test_count_is_case_insensitive() {
        let rack: Rack = "EEA".parse().unwrap();
        assert_eq!(rack.count('e'), 2);
        assert!(rack.contains('a'));
        assert!(!rack.contains('z'));
    }

    #[test]
    fn test_empty_rack() {
        let rack: Rack = "".parse().unwrap();
        assert!(rack.is_empty());
    }
}
