//! Subcommand bodies. Each returns the text to print.

use crate::config::SolverConfig;
use crate::dictionary::load_dictionary;
use crate::position_file::PositionFile;
use anyhow::Result;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;
use strictly_scrabble::{BestMove, Dictionary, Rack, SearchError, StandardPoints, best_move};
use tracing::{info, instrument};

/// Machine-readable result of `best --json`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    /// The rack searched.
    pub rack: Rack,
    /// Move notation of the best play, or `None` to pass.
    pub play: Option<String>,
    /// Full search result, when a move was found.
    pub best: Option<BestMove>,
}

/// Runs the search for the position in `position`.
///
/// A position with no legal move is reported as a pass, not an error.
#[instrument(skip(config, position), fields(position = %position.as_ref().display()))]
pub fn best(config: &SolverConfig, position: impl AsRef<Path>, json: bool) -> Result<String> {
    let words = load_dictionary(config)?;
    let loaded = PositionFile::from_file(position)?.load(&words)?;

    let outcome = best_move(
        loaded.state(),
        loaded.rack(),
        &words,
        &StandardPoints,
        config.search(),
    );
    let best = match outcome {
        Ok(found) => Some(found),
        Err(SearchError::NoLegalMove { considered }) => {
            info!(considered, "No legal move; passing");
            None
        }
        Err(err) => return Err(err.into()),
    };

    if json {
        let report = SearchReport {
            rack: loaded.rack().clone(),
            play: best.as_ref().map(|b| b.mv().to_string()),
            best,
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let mut out = loaded.state().board().display();
    writeln!(out)?;
    writeln!(out, "Rack: {}", loaded.rack())?;
    match best {
        Some(found) => {
            writeln!(out, "Best move: {}", found.mv())?;
            writeln!(out, "Score: {}", found.score())?;
            if let Some(definition) = words.definition(found.mv().word()) {
                writeln!(out, "Definition: {}", definition)?;
            }
            write!(
                out,
                "Tiles used: {}, placements considered: {}",
                found.tiles_used(),
                found.considered()
            )?;
        }
        None => write!(out, "No legal move; pass this turn.")?,
    }
    Ok(out)
}

/// Reports whether `word` is playable, with its definition when known.
#[instrument(skip(config))]
pub fn word(config: &SolverConfig, word: &str) -> Result<String> {
    let words = load_dictionary(config)?;
    let upper = word.trim().to_ascii_uppercase();

    if !words.is_valid_word(&upper) {
        return Ok(format!("{} is not a valid word.", upper));
    }
    Ok(match words.definition(&upper) {
        Some(definition) => format!("{} is a valid word.\nDefinition: {}", upper, definition),
        None => format!("{} is a valid word.", upper),
    })
}

/// Renders the board after replaying the position's moves.
#[instrument(skip(config, position), fields(position = %position.as_ref().display()))]
pub fn board(config: &SolverConfig, position: impl AsRef<Path>) -> Result<String> {
    let words = load_dictionary(config)?;
    let loaded = PositionFile::from_file(position)?.load(&words)?;
    Ok(loaded.state().board().display())
}
