//! Stores for the single persisted high score.

use super::StoreError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Capability to read and write the best-ever score.
///
/// The engine reads when it is built and when a session starts, and writes
/// at most once per finished session.
pub trait HighScoreStore {
    /// Returns the stored high score, or 0 if none was ever written.
    fn read_high_score(&self) -> Result<i32, StoreError>;

    /// Replaces the stored high score.
    fn write_high_score(&mut self, score: i32) -> Result<(), StoreError>;
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for &mut S {
    fn read_high_score(&self) -> Result<i32, StoreError> {
        (**self).read_high_score()
    }

    fn write_high_score(&mut self, score: i32) -> Result<(), StoreError> {
        (**self).write_high_score(score)
    }
}

/// In-memory store; counts writes so callers can observe persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHighScore {
    value: i32,
    writes: usize,
}

impl MemoryHighScore {
    /// Creates a store holding `value`.
    pub fn new(value: i32) -> Self {
        Self { value, writes: 0 }
    }

    /// Current stored value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Number of writes performed.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl HighScoreStore for MemoryHighScore {
    fn read_high_score(&self) -> Result<i32, StoreError> {
        Ok(self.value)
    }

    fn write_high_score(&mut self, score: i32) -> Result<(), StoreError> {
        self.value = score;
        self.writes += 1;
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct HighScoreFile {
    high_score: i32,
}

/// High score kept in a small TOML file (`high_score = N`).
///
/// A missing file reads as 0.
#[derive(Debug, Clone)]
pub struct FileHighScore {
    path: PathBuf,
}

impl FileHighScore {
    /// Creates a store backed by the file at `path`.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        debug!("Creating file high score store");
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileHighScore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn read_high_score(&self) -> Result<i32, StoreError> {
        if !self.path.exists() {
            debug!("No high score file yet");
            return Ok(0);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let file: HighScoreFile = toml::from_str(&content)?;
        debug!(high_score = file.high_score, "High score read");
        Ok(file.high_score)
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn write_high_score(&mut self, score: i32) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string(&HighScoreFile { high_score: score })?;
        std::fs::write(&self.path, content)?;
        info!(high_score = score, "High score saved");
        Ok(())
    }
}
