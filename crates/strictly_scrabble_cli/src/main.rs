//! Strictly Scrabble - command-line solver
//!
//! Loads a word list and a position file, then prints the best move.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_scrabble_cli::{SolverConfig, commands};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,strictly_scrabble=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(config = %cli.config.display(), "Starting Strictly Scrabble");
    let config = SolverConfig::from_file(&cli.config)?;

    let output = match cli.command {
        Command::Best { position, json } => commands::best(&config, position, json)?,
        Command::Word { word } => commands::word(&config, &word)?,
        Command::Board { position } => commands::board(&config, position)?,
    };
    println!("{}", output);
    Ok(())
}
