//! Solver configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_scrabble::SearchConfig;
use tracing::{debug, info, instrument};

/// Where the word lists live and how the search runs.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Word list, one word per line.
    words_path: PathBuf,

    /// Optional definitions file, one `WORD definition` per line.
    #[serde(default)]
    definitions_path: Option<PathBuf>,

    /// Leading lines to skip in both files (licence banners and the like).
    #[serde(default)]
    header_lines: usize,

    /// Search tuning.
    #[serde(default)]
    search: SearchConfig,
}

impl SolverConfig {
    /// Creates a configuration with defaults for everything but the word list.
    #[instrument(skip(words_path), fields(words_path = %words_path.as_ref().display()))]
    pub fn new(words_path: impl AsRef<Path>) -> Self {
        Self {
            words_path: words_path.as_ref().to_path_buf(),
            definitions_path: None,
            header_lines: 0,
            search: SearchConfig::default(),
        }
    }

    /// Sets the definitions file.
    pub fn with_definitions(mut self, path: impl AsRef<Path>) -> Self {
        self.definitions_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the search tuning.
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Loads configuration from a TOML file.
    ///
    /// Relative paths inside the file are resolved against the file's directory.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let mut config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if let Some(base) = path.as_ref().parent() {
            config.words_path = base.join(&config.words_path);
            config.definitions_path = config.definitions_path.map(|p| base.join(p));
        }

        info!(
            words = %config.words_path.display(),
            zone_pruning = config.search.zone_pruning,
            "Config loaded successfully"
        );
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
