//! Session state owned by the engine.

use super::phases::RoundPhase;
use super::types::{RoundState, TOTAL_ROUNDS};
use serde::{Deserialize, Serialize};

/// Everything the engine knows about the current play session.
///
/// Only the engine mutates it; hosts read it through
/// [`SessionEngine::state`](super::SessionEngine::state).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub(crate) score: i32,
    pub(crate) round: Option<RoundState>,
    pub(crate) rounds_played: u32,
    pub(crate) total_rounds: u32,
    pub(crate) high_score: i32,
    pub(crate) phase: RoundPhase,
}

impl SessionState {
    /// State of an engine that has not started a game yet.
    pub(crate) fn idle(high_score: i32) -> Self {
        Self {
            score: 0,
            round: None,
            rounds_played: 0,
            total_rounds: TOTAL_ROUNDS,
            high_score,
            phase: RoundPhase::NotStarted,
        }
    }

    /// Current score; may be negative.
    pub fn score(&self) -> i32 {
        self.score
    }

    /// The round on screen, or the last round once the game is over.
    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    /// Rounds completed so far.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Rounds per session.
    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    /// Best score seen, including the persisted value.
    pub fn high_score(&self) -> i32 {
        self.high_score
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> &RoundPhase {
        &self.phase
    }

    /// True once the final round has been advanced past.
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, RoundPhase::GameOver)
    }
}
