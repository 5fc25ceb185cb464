//! Board coordinates: columns 1-15 and rows A-O.

use super::geometry::Direction;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of columns (and rows) on the board.
pub const BOARD_SIZE: usize = 15;

/// Total number of squares on the board.
pub const SQUARE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A board row, labelled A (top) to O (bottom).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Row {
    /// Top row.
    A,
    /// Second row.
    B,
    /// Third row.
    C,
    /// Fourth row.
    D,
    /// Fifth row.
    E,
    /// Sixth row.
    F,
    /// Seventh row.
    G,
    /// Centre row.
    H,
    /// Ninth row.
    I,
    /// Tenth row.
    J,
    /// Eleventh row.
    K,
    /// Twelfth row.
    L,
    /// Thirteenth row.
    M,
    /// Fourteenth row.
    N,
    /// Bottom row.
    O,
}

impl Row {
    /// All 15 rows, top to bottom.
    pub const ALL: [Row; BOARD_SIZE] = [
        Row::A,
        Row::B,
        Row::C,
        Row::D,
        Row::E,
        Row::F,
        Row::G,
        Row::H,
        Row::I,
        Row::J,
        Row::K,
        Row::L,
        Row::M,
        Row::N,
        Row::O,
    ];

    /// Zero-based index of the row (A = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Row at the given zero-based index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The row label as a character.
    pub fn label(self) -> char {
        (b'A' + self as u8) as char
    }
}

/// Error produced when a square cannot be constructed or parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PositionError {
    /// Column outside 1-15.
    #[display("Column {column} is outside 1-15")]
    ColumnOutOfRange {
        /// The rejected column.
        column: u8,
    },

    /// Text that is not `<column><row>` notation.
    #[display("Cannot parse square '{input}' (expected e.g. 8H)")]
    Unparsable {
        /// The rejected input.
        input: String,
    },
}

impl std::error::Error for PositionError {}

/// A square on the 15x15 board.
///
/// Construction is checked, so every `Position` in circulation is on the
/// board and lookups never need a bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Position {
    row: Row,
    column: u8,
}

impl Position {
    /// Top-left square, where base placements are built.
    pub const ORIGIN: Position = Position {
        row: Row::A,
        column: 1,
    };

    /// The centre square.
    pub const CENTER: Position = Position {
        row: Row::H,
        column: 8,
    };

    /// Creates a position, rejecting columns outside 1-15.
    pub fn new(column: u8, row: Row) -> Result<Self, PositionError> {
        if !(1..=BOARD_SIZE as u8).contains(&column) {
            return Err(PositionError::ColumnOutOfRange { column });
        }
        Ok(Self { row, column })
    }

    /// Column number (1-15).
    pub fn column(self) -> u8 {
        self.column
    }

    /// Row.
    pub fn row(self) -> Row {
        self.row
    }

    /// Row-major board index (0-224).
    pub fn index(self) -> usize {
        self.row.index() * BOARD_SIZE + (self.column as usize - 1)
    }

    /// Creates a position from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        let row = Row::from_index(index / BOARD_SIZE)?;
        Some(Self {
            row,
            column: (index % BOARD_SIZE) as u8 + 1,
        })
    }

    /// Every square in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..SQUARE_COUNT).filter_map(Self::from_index)
    }

    /// Shifts by signed column and row deltas, or `None` past the edge.
    pub fn offset(self, columns: i32, rows: i32) -> Option<Self> {
        let column = i32::from(self.column).checked_add(columns)?;
        let row = (self.row.index() as i32).checked_add(rows)?;
        if !(1..=BOARD_SIZE as i32).contains(&column) || !(0..BOARD_SIZE as i32).contains(&row) {
            return None;
        }
        Some(Self {
            row: Row::from_index(row as usize)?,
            column: column as u8,
        })
    }

    /// Shifts `distance` squares along `direction`.
    pub fn step(self, direction: Direction, distance: i32) -> Option<Self> {
        match direction {
            Direction::Horizontal => self.offset(distance, 0),
            Direction::Vertical => self.offset(0, distance),
        }
    }

    /// Coordinate along `direction` (column for horizontal, row index for vertical).
    pub fn axis(self, direction: Direction) -> usize {
        match direction {
            Direction::Horizontal => self.column as usize - 1,
            Direction::Vertical => self.row.index(),
        }
    }

    /// The up to four orthogonal neighbours (up, down, left, right), omitting
    /// any that would fall off the board.
    #[instrument]
    pub fn neighbors(self) -> Vec<Position> {
        [(0, -1), (0, 1), (-1, 0), (1, 0)]
            .into_iter()
            .filter_map(|(dc, dr)| self.offset(dc, dr))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

impl FromStr for Position {
    type Err = PositionError;

    /// Parses `<column><row>` notation such as `8H` or `15o`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let unparsable = || PositionError::Unparsable {
            input: s.to_string(),
        };

        let split = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(unparsable)?;
        let (digits, letters) = trimmed.split_at(split);
        let column: u8 = digits.parse().map_err(|_| unparsable())?;
        if letters.len() != 1 {
            return Err(unparsable());
        }
        let row = Row::from_str(letters).map_err(|_| unparsable())?;
        Self::new(column, row)
    }
}

impl TryFrom<String> for Position {
    type Error = PositionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Position> for String {
    fn from(pos: Position) -> Self {
        pos.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, pos) in Position::all().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(Position::from_index(i), Some(pos));
        }
        assert_eq!(Position::all().count(), SQUARE_COUNT);
        assert_eq!(Position::from_index(SQUARE_COUNT), None);
    }

    #[test]
    fn test_center_is_middle_index() {
        assert_eq!(Position::CENTER.index(), SQUARE_COUNT / 2);
    }

    #[test]
    fn test_parse_notation() {
        assert_eq!("8H".parse::<Position>().unwrap(), Position::CENTER);
        assert_eq!("1a".parse::<Position>().unwrap(), Position::ORIGIN);
        assert_eq!(
            "15O".parse::<Position>().unwrap(),
            Position::new(15, Row::O).unwrap()
        );
        assert!("16A".parse::<Position>().is_err());
        assert!("0A".parse::<Position>().is_err());
        assert!("8P".parse::<Position>().is_err());
        assert!("H8".parse::<Position>().is_err());
        assert!("8".parse::<Position>().is_err());
    }

    #[test]
    fn test_offset_extremes_fall_off_board() {
        let corner = Position::new(15, Row::O).unwrap();
        assert_eq!(corner.offset(i32::MAX, 0), None);
        assert_eq!(corner.offset(0, i32::MAX), None);
        assert_eq!(Position::ORIGIN.offset(i32::MIN, 0), None);
        assert_eq!(Position::ORIGIN.offset(0, i32::MIN), None);
        assert_eq!(corner.offset(-14, -14), Some(Position::ORIGIN));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::CENTER.to_string(), "8H");
        assert_eq!(Row::O.label(), 'O');
    }

    #[test]
    fn test_neighbors_at_corner_and_center() {
        assert_eq!(Position::ORIGIN.neighbors().len(), 2);
        assert_eq!(Position::CENTER.neighbors().len(), 4);
        let edge = Position::new(8, Row::A).unwrap();
        assert_eq!(edge.neighbors().len(), 3);
    }

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(Position::ORIGIN.offset(-1, 0), None);
        assert_eq!(Position::ORIGIN.offset(0, -1), None);
        assert_eq!(
            Position::ORIGIN.offset(14, 14),
            Some(Position::new(15, Row::O).unwrap())
        );
        assert_eq!(Position::ORIGIN.offset(15, 0), None);
    }
}
