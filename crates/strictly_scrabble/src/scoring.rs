//! Move scoring from premium squares and letter values.
//!
//! Only the squares a move covers are scored; cross-words formed along the
//! way add nothing. Premium kinds are read from the board as it stands, so
//! scoring a hypothetical move has no side effects.

use super::board::{Board, SquareKind};
use super::geometry::Move;
use super::lexicon::PointTable;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Bonus for filling this many previously empty squares in one move.
pub const BINGO_TILES: usize = 7;

/// Points awarded for a bingo.
pub const BINGO_BONUS: u32 = 50;

/// How a score was made up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct ScoreBreakdown {
    /// Sum of letter values after letter premiums.
    letters: u32,
    /// Word multiplier applied to `letters` (1 when none).
    word_multiplier: u32,
    /// Previously empty squares the move fills.
    tiles_used: usize,
    /// Bingo bonus (0 or [`BINGO_BONUS`]).
    bingo: u32,
}

impl ScoreBreakdown {
    /// Final score.
    pub fn total(&self) -> u32 {
        self.letters * self.word_multiplier + self.bingo
    }
}

/// Scores `mv` against the current board.
#[instrument(skip(board, points, mv), fields(mv = %mv))]
pub fn score<P: PointTable + ?Sized>(board: &Board, points: &P, mv: &Move) -> u32 {
    breakdown(board, points, mv).total()
}

/// Scores `mv` and reports the parts.
///
/// Double and triple word hits do not combine: any double-word hit (the
/// centre counts as one) multiplies by twice the number of double hits, and
/// triple-word hits apply only when there are no double hits.
pub fn breakdown<P: PointTable + ?Sized>(board: &Board, points: &P, mv: &Move) -> ScoreBreakdown {
    let mut letters = 0;
    let mut double_word_hits = 0;
    let mut triple_word_hits = 0;
    let mut tiles_used = 0;

    for (pos, letter) in mv.placements() {
        let value = points.point_value(letter);
        if board.is_empty(pos) {
            tiles_used += 1;
        }
        letters += match board.square_kind(pos) {
            SquareKind::Normal => value,
            SquareKind::DoubleLetter => value * 2,
            SquareKind::TripleLetter => value * 3,
            SquareKind::Middle | SquareKind::DoubleWord => {
                double_word_hits += 1;
                value
            }
            SquareKind::TripleWord => {
                triple_word_hits += 1;
                value
            }
        };
    }

    let word_multiplier = if double_word_hits > 0 {
        2 * double_word_hits
    } else if triple_word_hits > 0 {
        3 * triple_word_hits
    } else {
        1
    };

    let bingo = if tiles_used >= BINGO_TILES {
        BINGO_BONUS
    } else {
        0
    };

    ScoreBreakdown::new(letters, word_multiplier, tiles_used, bingo)
}
