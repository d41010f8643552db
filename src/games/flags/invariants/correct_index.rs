//! Correct index invariant: the target is one of the candidates.

use super::super::state::SessionState;
use super::super::types::CANDIDATE_COUNT;
use super::Invariant;

/// Invariant: `correct_index` points into the candidate set.
pub struct CorrectIndexInvariant;

impl Invariant<SessionState> for CorrectIndexInvariant {
    fn holds(state: &SessionState) -> bool {
        match state.round() {
            Some(round) => round.correct_index() < CANDIDATE_COUNT,
            None => true,
        }
    }

    fn description() -> &'static str {
        "Correct index points at one of the candidates"
    }
}
