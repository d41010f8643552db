//! Round lifecycle phases.

use super::types::GuessOutcome;
use serde::{Deserialize, Serialize};

/// Where the session is in the round state machine.
///
/// `NotStarted → Unanswered → Answered → (Unanswered | GameOver)`.
/// `GameOver` is left only by starting a new game.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Engine built, no game started yet.
    #[default]
    NotStarted,
    /// Round on screen, waiting for a guess.
    Unanswered,
    /// Round guessed; waiting for the host to advance.
    Answered(GuessOutcome),
    /// All rounds played.
    GameOver,
}

impl RoundPhase {
    /// Returns true if a round is on screen (answered or not).
    pub fn is_active(&self) -> bool {
        matches!(self, RoundPhase::Unanswered | RoundPhase::Answered(_))
    }

    /// Returns the outcome of the current round, if answered.
    pub fn outcome(&self) -> Option<&GuessOutcome> {
        match self {
            RoundPhase::Answered(outcome) => Some(outcome),
            _ => None,
        }
    }
}
