//! Round count invariant: the session never runs past its budget.

use super::super::phases::RoundPhase;
use super::super::state::SessionState;
use super::Invariant;

/// Invariant: rounds played stay within the total, and an active round is
/// numbered one past the rounds already played.
pub struct RoundCountInvariant;

impl Invariant<SessionState> for RoundCountInvariant {
    fn holds(state: &SessionState) -> bool {
        if state.rounds_played() > state.total_rounds() {
            return false;
        }

        match (state.phase(), state.round()) {
            (RoundPhase::Unanswered | RoundPhase::Answered(_), Some(round)) => {
                round.round_number() == state.rounds_played() + 1
            }
            (RoundPhase::Unanswered | RoundPhase::Answered(_), None) => false,
            (RoundPhase::GameOver, _) => state.rounds_played() == state.total_rounds(),
            (RoundPhase::NotStarted, _) => true,
        }
    }

    fn description() -> &'static str {
        "Rounds played stay within the session total"
    }
}
