//! Empty-zone detection used to prune the search.
//!
//! A zone is a set of squares on rows that are empty together with their
//! neighbouring row. Zones are hints: a move they do not rule out may still
//! be rejected later.

use super::board::Board;
use super::geometry::Move;
use super::position::{Position, Row};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// A set of squares known to be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Zone {
    squares: HashSet<Position>,
}

impl Zone {
    /// True if `pos` is in the zone.
    pub fn contains(&self, pos: Position) -> bool {
        self.squares.contains(&pos)
    }

    /// Number of squares in the zone.
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// True if the zone has no squares.
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    fn add_row(&mut self, board: &Board, row: Row) {
        self.squares.extend(board.row(row));
    }
}

/// The upper and lower empty zones of a board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmptyZones {
    /// Scanned from the top: every empty row whose next row down is also
    /// empty (or is the last row).
    pub upper: Zone,
    /// Scanned from the bottom: every empty row whose next row up is also
    /// empty (or is the first row).
    pub lower: Zone,
    occupied: bool,
}

impl EmptyZones {
    /// True if `mv` lies entirely inside the zones of a board that already
    /// holds tiles.
    ///
    /// Zone squares are always empty, so such a move would overlap no
    /// existing tile and is never legal. On an empty board nothing is ruled
    /// out, because the opening move is allowed to land on empty squares.
    pub fn rules_out(&self, mv: &Move) -> bool {
        self.occupied
            && mv
                .affected_squares()
                .into_iter()
                .all(|pos| self.upper.contains(pos) || self.lower.contains(pos))
    }
}

/// Finds the upper and lower empty zones of `board`.
#[instrument(skip(board))]
pub fn find_empty_zones(board: &Board) -> EmptyZones {
    let empty: Vec<bool> = Row::ALL.iter().map(|&row| board.row_is_empty(row)).collect();
    let last = Row::ALL.len() - 1;

    let mut zones = EmptyZones {
        occupied: !board.is_blank(),
        ..EmptyZones::default()
    };

    for (i, &row) in Row::ALL.iter().enumerate() {
        if empty[i] && (i == last || empty[i + 1]) {
            zones.upper.add_row(board, row);
        }
    }

    for (i, &row) in Row::ALL.iter().enumerate().rev() {
        if empty[i] && (i == 0 || empty[i - 1]) {
            zones.lower.add_row(board, row);
        }
    }

    debug!(
        upper = zones.upper.len(),
        lower = zones.lower.len(),
        "Empty zones refreshed"
    );
    zones
}
