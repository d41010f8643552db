//! High-score persistence.

mod error;
mod high_score;

pub use error::StoreError;
pub use high_score::{FileHighScore, HighScoreStore, MemoryHighScore};
