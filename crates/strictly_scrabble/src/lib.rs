//! Strictly Scrabble - move generation, legality and scoring for a 15x15 word game
//!
//! The engine is pure: it never reads files or talks to a terminal. Callers
//! hand it a [`Dictionary`] and a [`PointTable`], keep a [`GameState`] for
//! the session, and ask [`best_move`] for the highest-scoring play.
//!
//! # Architecture
//!
//! - **Grid**: [`Board`] with the classic premium layout and consumed premiums
//! - **Geometry**: [`Move`] endpoints, [`Direction`] and translation
//! - **Legality**: [`LegalMove`] composed of one check per rule
//! - **Scoring**: [`score`] and [`breakdown`]
//! - **Search**: [`best_move`] with optional zone pruning
//!
//! # Example
//!
//! ```
//! use strictly_scrabble::{GameState, Rack, SearchConfig, StandardPoints, WordList, best_move};
//!
//! let state = GameState::new();
//! let words = WordList::from_words(["CAT", "AT"]);
//! let rack: Rack = "CAT".parse().unwrap();
//!
//! let best = best_move(&state, &rack, &words, &StandardPoints, &SearchConfig::default()).unwrap();
//! assert_eq!(best.mv().word(), "CAT");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod geometry;
mod history;
mod legality;
mod lexicon;
mod position;
mod rack;
mod scoring;
mod search;
mod state;
mod zones;

pub mod invariants;

// Crate-level exports - Grid
pub use board::{Board, BoardError, Cell, SquareKind};
pub use position::{BOARD_SIZE, Position, PositionError, Row, SQUARE_COUNT};

// Crate-level exports - Moves and history
pub use geometry::{Direction, Move, MoveError};
pub use history::{MoveHistory, MoveType, Play};
pub use state::{GameState, InvalidState};

// Crate-level exports - Capabilities
pub use lexicon::{Dictionary, PointTable, StandardPoints, WordList};
pub use rack::{BLANK, RACK_SIZE, Rack, RackError};

// Crate-level exports - Rules
pub use legality::{
    Consistent, CrossWordsValid, IllegalMove, LegalMove, LettersAvailable, LinesValid, NoOveruse,
    NotRepeated, NotVacuous, letters_required,
};
pub use scoring::{BINGO_BONUS, BINGO_TILES, ScoreBreakdown, breakdown, score};

// Crate-level exports - Search
pub use search::{BestMove, SearchConfig, SearchError, best_move};
pub use zones::{EmptyZones, Zone, find_empty_zones};
