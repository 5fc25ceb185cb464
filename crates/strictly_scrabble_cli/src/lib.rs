//! Strictly Scrabble CLI library - the file-backed collaborators of the engine
//!
//! - **Config**: TOML solver configuration with location-tracking errors
//! - **Dictionary**: word list and definition loading
//! - **Position files**: rack plus committed move log, vetted and replayed
//! - **Commands**: the bodies of the `best`, `word` and `board` subcommands

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod dictionary;
mod position_file;

pub mod commands;

// Crate-level exports - Configuration
pub use config::{ConfigError, SolverConfig};

// Crate-level exports - Loading
pub use dictionary::{clean_definition, load_definitions, load_dictionary, load_words};
pub use position_file::{LoadedPosition, MoveEntry, PositionFile};
