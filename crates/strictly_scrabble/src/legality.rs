//! Legality checks for candidate moves.
//!
//! Each rule is its own check so it can be exercised in isolation;
//! [`LegalMove`] runs them in order and stops at the first failure.

use super::board::Board;
use super::geometry::{Direction, Move};
use super::lexicon::Dictionary;
use super::position::Position;
use super::rack::Rack;
use super::state::GameState;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::instrument;

/// Why a candidate move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMove {
    /// Every square is empty on a board that already holds tiles.
    #[display("Move {mv} does not touch any existing tile")]
    Disconnected {
        /// The rejected move.
        mv: Move,
    },

    /// The opening move does not cover the centre square.
    #[display("Opening move {mv} does not cover the centre square")]
    MissesCenter {
        /// The rejected move.
        mv: Move,
    },

    /// Every square is already occupied.
    #[display("Move {mv} places no new tiles")]
    PlacesNothing {
        /// The rejected move.
        mv: Move,
    },

    /// A square holds a different letter than the move would place.
    #[display("Square {square} holds '{existing}', not '{letter}'")]
    Conflict {
        /// The square.
        square: Position,
        /// Letter on the board.
        existing: char,
        /// Letter the move wants.
        letter: char,
    },

    /// A perpendicular run through a placed letter is not a word.
    #[display("Cross-word '{word}' through {square} is not a word")]
    InvalidCrossWord {
        /// The run read across the move.
        word: String,
        /// Square it passes through.
        square: Position,
    },

    /// A run of two or more letters on a touched line is not a word.
    #[display("'{word}' is not a word")]
    InvalidLine {
        /// The offending run.
        word: String,
    },

    /// The rack lacks more distinct letters than there are blanks.
    #[display("Rack lacks {missing} and has only {blanks} blank(s)")]
    MissingLetters {
        /// Letters absent from the rack.
        missing: String,
        /// Blanks available.
        blanks: usize,
    },

    /// A letter is used more often than rack, board and blanks allow.
    #[display("'{letter}' used {uses} time(s) but only {available} available")]
    Overuse {
        /// The letter.
        letter: char,
        /// Times the word uses it.
        uses: usize,
        /// Copies available including blanks.
        available: usize,
    },

    /// The same word on the same squares was already played.
    #[display("Move {mv} has already been played")]
    Repeated {
        /// The rejected move.
        mv: Move,
    },
}

impl std::error::Error for IllegalMove {}

// ─────────────────────────────────────────────────────────────
//  Board overlay
// ─────────────────────────────────────────────────────────────

/// The board as it would read with a move written onto it.
struct Overlay<'a> {
    board: &'a Board,
    placed: HashMap<Position, char>,
}

impl<'a> Overlay<'a> {
    fn new(board: &'a Board, mv: &Move) -> Self {
        Self {
            board,
            placed: mv.placements().collect(),
        }
    }

    fn letter(&self, pos: Position) -> Option<char> {
        self.placed
            .get(&pos)
            .copied()
            .or_else(|| self.board.contents(pos))
    }

    /// The contiguous run of letters through `pos` along `direction`.
    fn run_through(&self, pos: Position, direction: Direction) -> String {
        let mut first = pos;
        while let Some(prev) = first.step(direction, -1) {
            if self.letter(prev).is_none() {
                break;
            }
            first = prev;
        }

        let mut run = String::new();
        let mut current = Some(first);
        while let Some(square) = current {
            match self.letter(square) {
                Some(letter) => run.push(letter),
                None => break,
            }
            current = square.step(direction, 1);
        }
        run
    }

    /// Every run of two or more letters on the full line through `pos`.
    fn words_on_line(&self, pos: Position, direction: Direction) -> Vec<String> {
        let line = match direction {
            Direction::Horizontal => self.board.row(pos.row()),
            Direction::Vertical => self.board.column(pos.column()),
        };

        let mut words = Vec::new();
        let mut run = String::new();
        for square in line {
            match self.letter(square) {
                Some(letter) => run.push(letter),
                None => {
                    if run.len() >= 2 {
                        words.push(run.clone());
                    }
                    run.clear();
                }
            }
        }
        if run.len() >= 2 {
            words.push(run);
        }
        words
    }
}

/// Letters the move would place, and how many board letters it overlaps.
struct Usage {
    placed: BTreeMap<char, usize>,
    overlapped: BTreeMap<char, usize>,
}

impl Usage {
    fn of(board: &Board, mv: &Move) -> Self {
        let mut placed = BTreeMap::new();
        let mut overlapped = BTreeMap::new();
        for (pos, letter) in mv.placements() {
            let tally = if board.is_empty(pos) {
                &mut placed
            } else {
                &mut overlapped
            };
            *tally.entry(letter).or_insert(0) += 1;
        }
        Self { placed, overlapped }
    }
}

// ─────────────────────────────────────────────────────────────
//  Individual checks
// ─────────────────────────────────────────────────────────────

/// The move must connect to existing tiles, or open the game through the centre.
pub struct NotVacuous;

impl NotVacuous {
    /// Rejects moves that touch no tile on an occupied board, openings away
    /// from the centre, and moves that place nothing.
    pub fn check(board: &Board, mv: &Move) -> Result<(), IllegalMove> {
        let squares = mv.affected_squares();
        let empty = squares.iter().filter(|&&pos| board.is_empty(pos)).count();

        if empty == 0 {
            return Err(IllegalMove::PlacesNothing { mv: mv.clone() });
        }
        if empty == squares.len() {
            if !board.is_blank() {
                return Err(IllegalMove::Disconnected { mv: mv.clone() });
            }
            if !squares.contains(&Position::CENTER) {
                return Err(IllegalMove::MissesCenter { mv: mv.clone() });
            }
        }
        Ok(())
    }
}

/// Occupied squares must already hold the letter the move places there.
pub struct Consistent;

impl Consistent {
    /// Rejects the first square whose existing letter differs.
    pub fn check(board: &Board, mv: &Move) -> Result<(), IllegalMove> {
        for (square, letter) in mv.placements() {
            match board.contents(square) {
                Some(existing) if existing != letter => {
                    return Err(IllegalMove::Conflict {
                        square,
                        existing,
                        letter,
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// Every run read across the move must be a single letter or a word.
pub struct CrossWordsValid;

impl CrossWordsValid {
    /// Reads the perpendicular run through each affected square.
    pub fn check<D: Dictionary + ?Sized>(
        board: &Board,
        dictionary: &D,
        mv: &Move,
    ) -> Result<(), IllegalMove> {
        let overlay = Overlay::new(board, mv);
        let across = mv.direction().perpendicular();
        for square in mv.affected_squares() {
            let word = overlay.run_through(square, across);
            if word.len() >= 2 && !dictionary.is_valid_word(&word) {
                return Err(IllegalMove::InvalidCrossWord { word, square });
            }
        }
        Ok(())
    }
}

/// Every run of two or more letters on each line the move touches must be a word.
pub struct LinesValid;

impl LinesValid {
    /// Checks the move's own line and every perpendicular line through it.
    pub fn check<D: Dictionary + ?Sized>(
        board: &Board,
        dictionary: &D,
        mv: &Move,
    ) -> Result<(), IllegalMove> {
        let overlay = Overlay::new(board, mv);
        let direction = mv.direction();

        let main = overlay.words_on_line(mv.start(), direction);
        let crossing = mv
            .affected_squares()
            .into_iter()
            .flat_map(|square| overlay.words_on_line(square, direction.perpendicular()));

        for word in main.into_iter().chain(crossing) {
            if !dictionary.is_valid_word(&word) {
                return Err(IllegalMove::InvalidLine { word });
            }
        }
        Ok(())
    }
}

/// Each distinct letter the rack lacks entirely needs its own blank.
pub struct LettersAvailable;

impl LettersAvailable {
    /// Compares letters to be placed against the rack.
    pub fn check(board: &Board, rack: &Rack, mv: &Move) -> Result<(), IllegalMove> {
        let missing: String = Usage::of(board, mv)
            .placed
            .keys()
            .filter(|&&letter| !rack.contains(letter))
            .collect();
        if missing.len() > rack.blank_count() {
            return Err(IllegalMove::MissingLetters {
                missing,
                blanks: rack.blank_count(),
            });
        }
        Ok(())
    }
}

/// No letter may be used more often than rack, overlapped board tiles and blanks supply.
pub struct NoOveruse;

impl NoOveruse {
    /// Counts copies per letter; blanks are shared across all shortfalls.
    pub fn check(board: &Board, rack: &Rack, mv: &Move) -> Result<(), IllegalMove> {
        let usage = Usage::of(board, mv);
        let blanks = rack.blank_count();
        let mut blanks_left = blanks;

        for (&letter, &placed) in &usage.placed {
            let overlapped = usage.overlapped.get(&letter).copied().unwrap_or(0);
            let in_rack = rack.count(letter);
            let shortfall = placed.saturating_sub(in_rack);
            if shortfall > blanks_left {
                return Err(IllegalMove::Overuse {
                    letter,
                    uses: placed + overlapped,
                    available: in_rack + overlapped + blanks_left,
                });
            }
            blanks_left -= shortfall;
        }
        Ok(())
    }
}

/// The exact word-and-squares combination may only be played once.
pub struct NotRepeated;

impl NotRepeated {
    /// Looks the move up in both players' history.
    pub fn check(state: &GameState, mv: &Move) -> Result<(), IllegalMove> {
        if state.history().contains(mv) {
            Err(IllegalMove::Repeated { mv: mv.clone() })
        } else {
            Ok(())
        }
    }
}

/// Composite check: a move is legal when every individual check passes.
pub struct LegalMove;

impl LegalMove {
    /// Runs every check in order, stopping at the first failure.
    #[instrument(skip(state, rack, dictionary, mv), fields(mv = %mv))]
    pub fn check<D: Dictionary + ?Sized>(
        state: &GameState,
        rack: &Rack,
        dictionary: &D,
        mv: &Move,
    ) -> Result<(), IllegalMove> {
        let board = state.board();
        NotVacuous::check(board, mv)?;
        Consistent::check(board, mv)?;
        CrossWordsValid::check(board, dictionary, mv)?;
        LinesValid::check(board, dictionary, mv)?;
        LettersAvailable::check(board, rack, mv)?;
        NoOveruse::check(board, rack, mv)?;
        NotRepeated::check(state, mv)?;
        Ok(())
    }
}

/// Letters `mv` needs that neither the rack nor the board under it supplies.
///
/// Starts from the distinct letters of the word the rack does not hold, drops
/// any that sit on occupied squares of `mv`, then lets each blank cover one
/// more. Blanks go first to letters that have never been placed on the board,
/// so what remains is as likely as possible to be found there.
pub fn letters_required(board: &Board, rack: &Rack, mv: &Move) -> BTreeSet<char> {
    let mut needed: BTreeSet<char> = mv
        .word()
        .chars()
        .filter(|&letter| !rack.contains(letter))
        .collect();

    for square in mv.affected_squares() {
        if let Some(existing) = board.contents(square) {
            needed.remove(&existing);
        }
    }

    let (unseen, seen): (Vec<char>, Vec<char>) = needed
        .iter()
        .partition(|&&letter| !board.placed_letters().contains(&letter));
    for letter in unseen.into_iter().chain(seen).take(rack.blank_count()) {
        needed.remove(&letter);
    }
    needed
}
