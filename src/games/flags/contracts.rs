//! Contract-based validation for session transitions.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Advance, Guess, SessionError, StateViolation};
use super::invariants::{FlagInvariants, InvariantSet};
use super::phases::RoundPhase;
use super::state::SessionState;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), SessionError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), SessionError>;
}

// ─────────────────────────────────────────────────────────────
//  Guess Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the guess points at one of the three candidates.
pub struct IndexInRange;

impl IndexInRange {
    #[instrument]
    pub fn check(guess: &Guess) -> Result<(), SessionError> {
        if guess.in_range() {
            Ok(())
        } else {
            Err(SessionError::InvalidInput { index: guess.index })
        }
    }
}

/// Precondition: a round is on screen and has no guess yet.
pub struct RoundUnanswered;

impl RoundUnanswered {
    #[instrument(skip(state))]
    pub fn check(state: &SessionState) -> Result<(), SessionError> {
        match state.phase() {
            RoundPhase::Unanswered => Ok(()),
            RoundPhase::NotStarted => Err(SessionError::InvalidState(StateViolation::NotStarted)),
            RoundPhase::Answered(_) => Err(SessionError::InvalidState(StateViolation::AlreadyAnswered)),
            RoundPhase::GameOver => Err(SessionError::InvalidState(StateViolation::GameOver)),
        }
    }
}

/// Precondition: the round on screen has been answered.
pub struct RoundAnswered;

impl RoundAnswered {
    #[instrument(skip(state))]
    pub fn check(state: &SessionState) -> Result<(), SessionError> {
        match state.phase() {
            RoundPhase::Answered(_) => Ok(()),
            RoundPhase::NotStarted => Err(SessionError::InvalidState(StateViolation::NotStarted)),
            RoundPhase::Unanswered => Err(SessionError::InvalidState(StateViolation::NotAnswered)),
            RoundPhase::GameOver => Err(SessionError::InvalidState(StateViolation::GameOver)),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Guess Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for guesses.
///
/// Preconditions:
/// - Index is 0, 1 or 2
/// - Round is on screen and unanswered
///
/// Postconditions:
/// - Score moved by exactly one
/// - Round is marked answered with the new score
pub struct GuessContract;

impl Contract<SessionState, Guess> for GuessContract {
    fn pre(state: &SessionState, guess: &Guess) -> Result<(), SessionError> {
        IndexInRange::check(guess)?;
        RoundUnanswered::check(state)
    }

    fn post(before: &SessionState, after: &SessionState) -> Result<(), SessionError> {
        let delta = after.score() - before.score();
        if delta.abs() != 1 {
            warn!(delta, "Guess changed score by more than one");
            return Err(SessionError::InvariantViolation(format!(
                "Postcondition failed: score moved by {}",
                delta
            )));
        }

        match after.phase().outcome() {
            Some(outcome) if outcome.score_after == after.score() => check_invariants(after),
            Some(_) => Err(SessionError::InvariantViolation(
                "Postcondition failed: outcome score disagrees with session".to_string(),
            )),
            None => Err(SessionError::InvariantViolation(
                "Postcondition failed: round not marked answered".to_string(),
            )),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Advance Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for moving to the next round.
///
/// Preconditions:
/// - Round has been answered
///
/// Postconditions:
/// - Score unchanged
/// - Exactly one more round played
pub struct AdvanceContract;

impl Contract<SessionState, Advance> for AdvanceContract {
    fn pre(state: &SessionState, _action: &Advance) -> Result<(), SessionError> {
        RoundAnswered::check(state)
    }

    fn post(before: &SessionState, after: &SessionState) -> Result<(), SessionError> {
        if before.score() != after.score() {
            return Err(SessionError::InvariantViolation(
                "Postcondition failed: advancing changed the score".to_string(),
            ));
        }
        if after.rounds_played() != before.rounds_played() + 1 {
            return Err(SessionError::InvariantViolation(format!(
                "Postcondition failed: rounds played went from {} to {}",
                before.rounds_played(),
                after.rounds_played()
            )));
        }
        check_invariants(after)
    }
}

/// Runs the full invariant set, folding violations into one error.
pub fn check_invariants(state: &SessionState) -> Result<(), SessionError> {
    FlagInvariants::check_all(state).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        SessionError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
    })
}
