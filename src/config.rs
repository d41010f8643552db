//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the terminal game and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// File holding the persisted high score.
    #[serde(default = "default_high_score_path")]
    high_score_path: PathBuf,

    /// Optional TOML file of `[[country]]` tables replacing the built-in list.
    #[serde(default)]
    countries_path: Option<PathBuf>,

    /// Fixed RNG seed for reproducible sessions.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_high_score_path() -> PathBuf {
    PathBuf::from("guess_the_flag_score.toml")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            high_score_path: default_high_score_path(),
            countries_path: None,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(high_score_path = %config.high_score_path.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of file values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        high_score_path: Option<PathBuf>,
        countries_path: Option<PathBuf>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(path) = high_score_path {
            debug!(path = %path.display(), "Overriding high score path");
            self.high_score_path = path;
        }
        if countries_path.is_some() {
            self.countries_path = countries_path;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
