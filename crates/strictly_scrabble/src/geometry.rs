//! Move geometry: direction inference, affected squares and translation.
//!
//! A [`Move`] is a word plus its first and last squares. Direction is never
//! stored; it is derived from the endpoints every time it is needed.

use super::position::{BOARD_SIZE, Position, PositionError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Orientation of a move.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
}

impl Direction {
    /// The crossing direction.
    pub fn perpendicular(self) -> Self {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }
}

/// Error produced for a malformed move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The word has no letters.
    #[display("Move has an empty word")]
    EmptyWord,

    /// The word contains something other than A-Z.
    #[display("Word '{word}' contains a non-letter")]
    NotALetter {
        /// The rejected word.
        word: String,
    },

    /// The word cannot fit on the board.
    #[display("Word '{word}' is longer than the board")]
    TooLong {
        /// The rejected word.
        word: String,
    },

    /// Start and end share neither a row nor a column, or end precedes start.
    #[display("Squares {start} and {end} do not form a left-to-right or top-to-bottom line")]
    NotALine {
        /// First square.
        start: Position,
        /// Last square.
        end: Position,
    },

    /// The span between the endpoints does not match the word length.
    #[display("Word '{word}' has {letters} letters but {start}-{end} spans {span} squares")]
    LengthMismatch {
        /// The word.
        word: String,
        /// Letters in the word.
        letters: usize,
        /// First square.
        start: Position,
        /// Last square.
        end: Position,
        /// Squares covered by the endpoints.
        span: usize,
    },

    /// Move notation could not be parsed.
    #[display("Cannot parse move '{input}' (expected e.g. 'hello 1a 5a')")]
    Unparsable {
        /// The rejected input.
        input: String,
    },

    /// One of the squares could not be parsed.
    #[display("{_0}")]
    Square(PositionError),
}

impl std::error::Error for MoveError {}

impl From<PositionError> for MoveError {
    fn from(err: PositionError) -> Self {
        MoveError::Square(err)
    }
}

/// A word placed between two squares.
///
/// Moves are equal when word and both endpoints are equal, which is exactly
/// the identity used to reject repeated plays.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoveRecord", into = "MoveRecord")]
pub struct Move {
    word: String,
    start: Position,
    end: Position,
}

impl Move {
    /// Creates a well-formed move.
    ///
    /// The word is uppercased. Start and end must share a column (vertical)
    /// or a row (horizontal), run forwards, and cover exactly one square per
    /// letter.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] describing the first structural problem found.
    #[instrument(skip(word), fields(word = %word.as_ref()))]
    pub fn new(word: impl AsRef<str>, start: Position, end: Position) -> Result<Self, MoveError> {
        let word = normalize_word(word.as_ref())?;

        let direction = direction_between(start, end);
        let same_line = match direction {
            Direction::Vertical => true,
            Direction::Horizontal => start.row() == end.row(),
        };
        if !same_line || end.axis(direction) < start.axis(direction) {
            return Err(MoveError::NotALine { start, end });
        }

        let span = end.axis(direction) - start.axis(direction) + 1;
        let letters = word.chars().count();
        if span != letters {
            return Err(MoveError::LengthMismatch {
                word,
                letters,
                start,
                end,
                span,
            });
        }

        Ok(Self { word, start, end })
    }

    /// Builds the base placement of `word` at the top-left square.
    ///
    /// The search slides this placement across the board with
    /// [`Move::translate`].
    #[instrument(skip(word), fields(word = %word.as_ref()))]
    pub fn build_at_origin(word: impl AsRef<str>, direction: Direction) -> Result<Self, MoveError> {
        Self::build_at(word, Position::ORIGIN, direction)
    }

    /// Builds a placement of `word` starting at `origin` and running along `direction`.
    pub fn build_at(
        word: impl AsRef<str>,
        origin: Position,
        direction: Direction,
    ) -> Result<Self, MoveError> {
        let word = normalize_word(word.as_ref())?;
        let letters = word.chars().count() as i32;
        let end = origin
            .step(direction, letters - 1)
            .ok_or_else(|| MoveError::TooLong { word: word.clone() })?;
        Self::new(word, origin, end)
    }

    /// The (uppercase) word.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// First square.
    pub fn start(&self) -> Position {
        self.start
    }

    /// Last square.
    pub fn end(&self) -> Position {
        self.end
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.word.len()
    }

    /// Always false; a move has at least one letter.
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Vertical when both endpoints share a column, horizontal otherwise.
    pub fn direction(&self) -> Direction {
        direction_between(self.start, self.end)
    }

    /// The squares this move writes to, one per letter, in word order.
    pub fn affected_squares(&self) -> Vec<Position> {
        let direction = self.direction();
        (0..self.len() as i32)
            .filter_map(|i| self.start.step(direction, i))
            .collect()
    }

    /// Affected squares paired with the letter placed on each.
    pub fn placements(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.affected_squares().into_iter().zip(self.word.chars())
    }

    /// Shifts both endpoints `distance` squares along `direction`.
    ///
    /// Returns `None` when either endpoint would leave the board.
    pub fn translate(&self, direction: Direction, distance: i32) -> Option<Self> {
        let start = self.start.step(direction, distance)?;
        let end = self.end.step(direction, distance)?;
        Some(Self {
            word: self.word.clone(),
            start,
            end,
        })
    }
}

impl std::fmt::Display for Move {
    /// Renders as `word start end` in lowercase, e.g. `hello 1a 5a`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = format!("{} {} {}", self.word, self.start, self.end);
        write!(f, "{}", text.to_lowercase())
    }
}

impl FromStr for Move {
    type Err = MoveError;

    /// Parses `word start end`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [word, start, end] = parts.as_slice() else {
            return Err(MoveError::Unparsable {
                input: s.to_string(),
            });
        };
        Self::new(word, start.parse()?, end.parse()?)
    }
}

/// Serialized shape of a [`Move`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MoveRecord {
    word: String,
    start: Position,
    end: Position,
}

impl TryFrom<MoveRecord> for Move {
    type Error = MoveError;

    fn try_from(record: MoveRecord) -> Result<Self, Self::Error> {
        Move::new(record.word, record.start, record.end)
    }
}

impl From<Move> for MoveRecord {
    fn from(mv: Move) -> Self {
        Self {
            word: mv.word,
            start: mv.start,
            end: mv.end,
        }
    }
}

fn direction_between(start: Position, end: Position) -> Direction {
    if start.column() == end.column() {
        Direction::Vertical
    } else {
        Direction::Horizontal
    }
}

fn normalize_word(word: &str) -> Result<String, MoveError> {
    let word = word.trim();
    if word.is_empty() {
        return Err(MoveError::EmptyWord);
    }
    if !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(MoveError::NotALetter {
            word: word.to_string(),
        });
    }
    if word.len() > BOARD_SIZE {
        return Err(MoveError::TooLong {
            word: word.to_string(),
        });
    }
    Ok(word.to_ascii_uppercase())
}
