//! Command-line interface for strictly_scrabble.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Scrabble - best-move solver for a 15x15 word game
#[derive(Parser, Debug)]
#[command(name = "strictly_scrabble")]
#[command(about = "Finds the highest-scoring legal word placement", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the solver configuration
    #[arg(short, long, global = true, default_value = "strictly_scrabble.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search for the best move in a position
    Best {
        /// Position file (rack and committed moves)
        #[arg(short, long)]
        position: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a word and show its definition
    Word {
        /// The word to look up
        word: String,
    },

    /// Print the board for a position
    Board {
        /// Position file (rack and committed moves)
        #[arg(short, long)]
        position: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_best_with_global_config() {
        let cli = Cli::try_parse_from([
            "strictly_scrabble",
            "best",
            "--position",
            "game.toml",
            "--json",
            "--config",
            "solver.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("solver.toml"));
        assert!(matches!(cli.command, Command::Best { json: true, .. }));
    }

    #[test]
    fn test_default_config_path() {
        let cli = Cli::try_parse_from(["strictly_scrabble", "word", "cat"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("strictly_scrabble.toml"));
        assert!(matches!(cli.command, Command::Word { ref word } if word == "cat"));
    }
}
