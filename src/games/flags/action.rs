//! Player actions and the errors they can raise.
//!
//! Guesses and round advances are domain events. They are validated by the
//! contracts before the engine applies them.

use super::types::CANDIDATE_COUNT;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A player's pick among the three candidate flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("guess #{}", index)]
pub struct Guess {
    /// Index into the round's candidates.
    pub index: usize,
}

impl Guess {
    /// Creates a guess for the candidate at `index`.
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// True if the index points at one of the candidates.
    pub fn in_range(&self) -> bool {
        self.index < CANDIDATE_COUNT
    }
}

/// Request to move past an answered round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Advance;

/// Which part of the round lifecycle was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum StateViolation {
    /// No game has been started yet.
    #[display("no game has been started")]
    NotStarted,
    /// The current round already has a guess.
    #[display("round has already been answered")]
    AlreadyAnswered,
    /// The current round has no guess yet.
    #[display("round has not been answered yet")]
    NotAnswered,
    /// The session is over.
    #[display("game is over")]
    GameOver,
}

/// Error returned by session operations.
///
/// All variants are caller-contract violations; the session is left exactly
/// as it was before the failed call.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// Guess index outside `0..3`.
    #[display("Guess index {} is out of range (expected 0-{})", index, CANDIDATE_COUNT - 1)]
    InvalidInput {
        /// The rejected index.
        index: usize,
    },

    /// Operation called out of sequence.
    #[display("Invalid state: {}", _0)]
    InvalidState(#[error(not(source))] StateViolation),

    /// A postcondition failed after a transition (debug builds).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
