//! Candidates distinct invariant: the three flags on screen differ.

use super::super::state::SessionState;
use super::super::types::CANDIDATE_COUNT;
use super::Invariant;
use std::collections::HashSet;

/// Invariant: the round on screen shows three different countries.
pub struct CandidatesDistinctInvariant;

impl Invariant<SessionState> for CandidatesDistinctInvariant {
    fn holds(state: &SessionState) -> bool {
        let Some(round) = state.round() else {
            return true;
        };
        let candidates = round.candidates().as_slice();
        let unique: HashSet<_> = candidates.iter().collect();
        candidates.len() == CANDIDATE_COUNT && unique.len() == candidates.len()
    }

    fn description() -> &'static str {
        "Round shows three distinct candidates"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::flags::types::{CandidateSet, CountryCode, RoundState};

    fn state_with(codes: &[&str]) -> SessionState {
        let pool: Vec<CountryCode> = codes.iter().map(|c| CountryCode::from(*c)).collect();
        let mut state = SessionState::idle(0);
        state.round = Some(RoundState::new(1, CandidateSet::from_pool(&pool).unwrap(), 0, "X".into()));
        state
    }

    #[test]
    fn test_distinct_holds() {
        assert!(CandidatesDistinctInvariant::holds(&state_with(&["a", "b", "c"])));
    }

    #[test]
    fn test_duplicate_violates() {
        assert!(!CandidatesDistinctInvariant::holds(&state_with(&["a", "b", "a"])));
    }
}
