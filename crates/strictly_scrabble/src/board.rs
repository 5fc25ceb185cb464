//! The 15x15 grid: premium layout and tile contents.

use super::geometry::Move;
use super::position::{BOARD_SIZE, Position, Row, SQUARE_COUNT};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Premium kind of a square.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum SquareKind {
    /// No premium.
    Normal,
    /// The centre square; scores as a double word.
    Middle,
    /// Letter value doubled.
    DoubleLetter,
    /// Letter value tripled.
    TripleLetter,
    /// Word value doubled.
    DoubleWord,
    /// Word value tripled.
    TripleWord,
}

impl SquareKind {
    /// True for every kind except [`SquareKind::Normal`].
    pub fn is_premium(self) -> bool {
        self != SquareKind::Normal
    }
}

// Layout tables as (column, row number 1-15).
const TRIPLE_WORDS: [(u8, u8); 8] = [
    (1, 1),
    (8, 1),
    (15, 1),
    (1, 8),
    (15, 8),
    (1, 15),
    (8, 15),
    (15, 15),
];

const TRIPLE_LETTERS: [(u8, u8); 12] = [
    (6, 2),
    (10, 2),
    (2, 6),
    (6, 6),
    (10, 6),
    (14, 6),
    (2, 10),
    (6, 10),
    (10, 10),
    (14, 10),
    (6, 14),
    (10, 14),
];

const DOUBLE_WORDS: [(u8, u8); 16] = [
    (2, 2),
    (3, 3),
    (4, 4),
    (5, 5),
    (14, 2),
    (13, 3),
    (12, 4),
    (11, 5),
    (5, 11),
    (4, 12),
    (3, 13),
    (2, 14),
    (11, 11),
    (12, 12),
    (13, 13),
    (14, 14),
];

const DOUBLE_LETTERS: [(u8, u8); 24] = [
    (4, 1),
    (12, 1),
    (7, 3),
    (9, 3),
    (8, 4),
    (1, 4),
    (15, 4),
    (3, 7),
    (7, 7),
    (9, 7),
    (13, 7),
    (4, 8),
    (12, 8),
    (3, 9),
    (7, 9),
    (9, 9),
    (13, 9),
    (1, 12),
    (8, 12),
    (15, 12),
    (7, 13),
    (9, 13),
    (4, 15),
    (12, 15),
];

/// Builds the premium layout of a fresh board.
fn premium_layout() -> [SquareKind; SQUARE_COUNT] {
    let mut kinds = [SquareKind::Normal; SQUARE_COUNT];
    kinds[Position::CENTER.index()] = SquareKind::Middle;

    let tables: [(&[(u8, u8)], SquareKind); 4] = [
        (&TRIPLE_WORDS, SquareKind::TripleWord),
        (&TRIPLE_LETTERS, SquareKind::TripleLetter),
        (&DOUBLE_WORDS, SquareKind::DoubleWord),
        (&DOUBLE_LETTERS, SquareKind::DoubleLetter),
    ];
    for (coords, kind) in tables {
        for &(column, row) in coords {
            let index = (row as usize - 1) * BOARD_SIZE + (column as usize - 1);
            kinds[index] = kind;
        }
    }
    kinds
}

/// One square: its premium kind and the letter on it, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    kind: SquareKind,
    contents: Option<char>,
}

impl Cell {
    /// Premium kind (Normal once a letter has landed here).
    pub fn kind(&self) -> SquareKind {
        self.kind
    }

    /// Letter on the square.
    pub fn contents(&self) -> Option<char> {
        self.contents
    }
}

/// Error produced when a serialized board does not describe a real game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The cell list is not one entry per square.
    #[display("Board has {found} cells, expected 225")]
    WrongCellCount {
        /// Number of cells supplied.
        found: usize,
    },

    /// A square's premium is neither its layout kind nor consumed.
    #[display("Square {square} cannot be {kind}")]
    PremiumMismatch {
        /// The offending square.
        square: Position,
        /// The kind it claimed.
        kind: SquareKind,
    },

    /// A square holds something other than an uppercase letter.
    #[display("Square {square} holds '{letter}', which is not a letter")]
    NotALetter {
        /// The offending square.
        square: Position,
        /// The rejected character.
        letter: char,
    },

    /// A letter on the board is missing from the placed-letter set.
    #[display("Letter '{letter}' on {square} was never recorded as placed")]
    UnrecordedLetter {
        /// The offending square.
        square: Position,
        /// The unrecorded letter.
        letter: char,
    },
}

impl std::error::Error for BoardError {}

/// The game board.
///
/// Premium kinds only ever move towards [`SquareKind::Normal`]: once a square
/// holds a letter its premium is consumed for good.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRecord")]
pub struct Board {
    cells: Vec<Cell>,
    placed_letters: BTreeSet<char>,
}

impl Board {
    /// Creates an empty board with the classic premium layout.
    #[instrument]
    pub fn new() -> Self {
        let cells = premium_layout()
            .into_iter()
            .map(|kind| Cell {
                kind,
                contents: None,
            })
            .collect();
        Self {
            cells,
            placed_letters: BTreeSet::new(),
        }
    }

    /// The cell at `pos`.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Premium kind at `pos`.
    pub fn square_kind(&self, pos: Position) -> SquareKind {
        self.cells[pos.index()].kind
    }

    /// Letter at `pos`, if any.
    pub fn contents(&self, pos: Position) -> Option<char> {
        self.cells[pos.index()].contents
    }

    /// True if no letter is at `pos`.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.contents(pos).is_none()
    }

    /// True if no square holds a letter.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|cell| cell.contents.is_none())
    }

    /// Number of squares holding a letter.
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.contents.is_some()).count()
    }

    /// Every distinct letter that has ever been placed.
    pub fn placed_letters(&self) -> &BTreeSet<char> {
        &self.placed_letters
    }

    /// Writes `letter` at `pos` and consumes the square's premium.
    #[instrument(skip(self))]
    pub fn set_contents(&mut self, pos: Position, letter: char) {
        let letter = letter.to_ascii_uppercase();
        let cell = &mut self.cells[pos.index()];
        cell.contents = Some(letter);
        cell.kind = SquareKind::Normal;
        self.placed_letters.insert(letter);
    }

    /// Writes every letter of `mv` onto its affected square, then rescans
    /// the whole board to demote premiums under letters.
    ///
    /// History is not touched here; see `GameState::commit_move`.
    #[instrument(skip(self, mv), fields(mv = %mv))]
    pub fn apply(&mut self, mv: &Move) {
        for (pos, letter) in mv.placements() {
            self.set_contents(pos, letter);
        }
        self.reload_premiums();
    }

    /// Demotes the premium of every occupied square to Normal.
    ///
    /// A full O(225) pass on each commit; idempotent.
    fn reload_premiums(&mut self) {
        let mut demoted = 0;
        for cell in self.cells.iter_mut() {
            if cell.contents.is_some() && cell.kind.is_premium() {
                cell.kind = SquareKind::Normal;
                demoted += 1;
            }
        }
        debug!(demoted, "Premiums reloaded");
    }

    /// The 15 squares of `row`, left to right.
    pub fn row(&self, row: Row) -> Vec<Position> {
        (1..=BOARD_SIZE as u8)
            .filter_map(|column| Position::new(column, row).ok())
            .collect()
    }

    /// The 15 squares of column `column` (1-15), top to bottom.
    ///
    /// Empty for a column outside 1-15.
    pub fn column(&self, column: u8) -> Vec<Position> {
        Row::ALL
            .iter()
            .filter_map(|&row| Position::new(column, row).ok())
            .collect()
    }

    /// True if no square in `row` holds a letter.
    pub fn row_is_empty(&self, row: Row) -> bool {
        self.row(row).into_iter().all(|pos| self.is_empty(pos))
    }

    /// Orthogonal neighbours of `pos` that are on the board.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        pos.neighbors()
    }

    /// Renders the board as a text grid with column numbers and row letters.
    pub fn display(&self) -> String {
        let mut result = String::from("  ");
        for column in 1..=BOARD_SIZE {
            result.push_str(&format!("{:>3} ", column));
        }
        result.push('\n');
        result.push_str(&format!("  +{}\n", "---+".repeat(BOARD_SIZE)));
        for row in Row::ALL {
            result.push_str(&format!("{} |", row));
            for pos in self.row(row) {
                let symbol = self.contents(pos).unwrap_or(' ');
                result.push_str(&format!(" {} |", symbol));
            }
            result.push('\n');
            result.push_str(&format!("  +{}\n", "---+".repeat(BOARD_SIZE)));
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized shape of a [`Board`], checked before it becomes one.
#[derive(Debug, Clone, Deserialize)]
struct BoardRecord {
    cells: Vec<Cell>,
    placed_letters: BTreeSet<char>,
}

impl TryFrom<BoardRecord> for Board {
    type Error = BoardError;

    fn try_from(record: BoardRecord) -> Result<Self, Self::Error> {
        if record.cells.len() != SQUARE_COUNT {
            return Err(BoardError::WrongCellCount {
                found: record.cells.len(),
            });
        }
        let layout = premium_layout();
        for (square, cell) in Position::all().zip(&record.cells) {
            let expected = match cell.contents {
                Some(letter) if !letter.is_ascii_uppercase() => {
                    return Err(BoardError::NotALetter { square, letter });
                }
                Some(letter) if !record.placed_letters.contains(&letter) => {
                    return Err(BoardError::UnrecordedLetter { square, letter });
                }
                Some(_) => SquareKind::Normal,
                None => layout[square.index()],
            };
            if cell.kind != expected {
                return Err(BoardError::PremiumMismatch {
                    square,
                    kind: cell.kind,
                });
            }
        }
        Ok(Self {
            cells: record.cells,
            placed_letters: record.placed_letters,
        })
    }
}
