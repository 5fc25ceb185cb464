//! Best-move search.
//!
//! Every dictionary word is built at the top-left square in both directions,
//! passed through two cheap position-independent filters, then slid across
//! every column and row. Each placement that puts down at least one new tile
//! is scored, and only placements that would beat the incumbent are sent to
//! the full legality check.

use super::geometry::{Direction, Move};
use super::legality::{LegalMove, letters_required};
use super::lexicon::{Dictionary, PointTable};
use super::position::BOARD_SIZE;
use super::rack::Rack;
use super::scoring::breakdown;
use super::state::GameState;
use super::zones::find_empty_zones;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Tuning knobs for [`best_move`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct SearchConfig {
    /// Skip placements lying wholly inside the empty zones.
    pub zone_pruning: bool,
}

/// The winning placement and how the search got there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct BestMove {
    /// The move to play.
    #[serde(rename = "move")]
    mv: Move,
    /// Its score.
    score: u32,
    /// Placements generated during the search.
    considered: usize,
    /// Tiles the move takes from the rack.
    tiles_used: usize,
}

/// Why no move was produced.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The dictionary holds no words.
    #[display("Dictionary is empty; load a word list before searching")]
    EmptyDictionary,

    /// No placement passed every check.
    #[display("No legal move found after considering {considered} placements")]
    NoLegalMove {
        /// Placements generated during the search.
        considered: usize,
    },
}

impl std::error::Error for SearchError {}

/// Finds the highest-scoring legal move for `rack`.
///
/// Ties go to the first placement found: dictionary order, horizontal before
/// vertical, then increasing column shift, then increasing row shift.
///
/// # Errors
///
/// [`SearchError::EmptyDictionary`] if there are no words to try, and
/// [`SearchError::NoLegalMove`] if nothing passes the legality checks.
#[instrument(
    skip(state, rack, dictionary, points, config),
    fields(rack = %rack, words = dictionary.words().len(), zone_pruning = config.zone_pruning)
)]
pub fn best_move<D, P>(
    state: &GameState,
    rack: &Rack,
    dictionary: &D,
    points: &P,
    config: &SearchConfig,
) -> Result<BestMove, SearchError>
where
    D: Dictionary + ?Sized,
    P: PointTable + ?Sized,
{
    if dictionary.words().is_empty() {
        return Err(SearchError::EmptyDictionary);
    }

    let started = Instant::now();
    let board = state.board();
    let zones = find_empty_zones(board);
    let shifts = 0..BOARD_SIZE as i32;

    let mut best: Option<BestMove> = None;
    let mut considered = 0;
    let mut pruned = 0;

    for word in dictionary.words() {
        for direction in [Direction::Horizontal, Direction::Vertical] {
            let Ok(base) = Move::build_at_origin(word, direction) else {
                debug!(word = %word, "Word cannot be placed; skipping");
                continue;
            };

            let required = letters_required(board, rack, &base);
            if !required.is_subset(board.placed_letters()) || required.len() > 1 {
                continue;
            }

            for column_shift in shifts.clone() {
                let Some(shifted) = base.translate(Direction::Horizontal, column_shift) else {
                    break;
                };

                for row_shift in shifts.clone() {
                    let Some(candidate) = shifted.translate(Direction::Vertical, row_shift) else {
                        break;
                    };
                    considered += 1;

                    if config.zone_pruning && zones.rules_out(&candidate) {
                        pruned += 1;
                        continue;
                    }

                    let places_tile = candidate
                        .affected_squares()
                        .into_iter()
                        .any(|pos| board.is_empty(pos));
                    if !places_tile {
                        continue;
                    }

                    let parts = breakdown(board, points, &candidate);
                    let score = parts.total();
                    if best.as_ref().is_some_and(|incumbent| score <= incumbent.score) {
                        continue;
                    }

                    match LegalMove::check(state, rack, dictionary, &candidate) {
                        Ok(()) => {
                            debug!(mv = %candidate, score, "New best move");
                            best = Some(BestMove {
                                mv: candidate,
                                score,
                                considered: 0,
                                tiles_used: *parts.tiles_used(),
                            });
                        }
                        Err(reason) => {
                            debug!(mv = %candidate, score, %reason, "Candidate rejected");
                        }
                    }
                }
            }
        }
    }

    let elapsed_ms = started.elapsed().as_millis();
    match best {
        Some(found) => {
            let found = BestMove {
                considered,
                ..found
            };
            info!(
                mv = %found.mv,
                score = found.score,
                considered,
                pruned,
                elapsed_ms,
                "Search finished"
            );
            Ok(found)
        }
        None => {
            info!(considered, pruned, elapsed_ms, "Search found no legal move");
            Err(SearchError::NoLegalMove { considered })
        }
    }
}
