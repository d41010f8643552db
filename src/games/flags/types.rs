//! Core domain types for the flag guessing game.

use derive_more::{Display, From};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Number of flags shown in every round.
pub const CANDIDATE_COUNT: usize = 3;

/// Number of rounds in one session.
pub const TOTAL_ROUNDS: u32 = 10;

/// Stable identifier of a country (ISO-style code, e.g. `"fr"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, From)]
#[serde(transparent)]
pub struct CountryCode(String);

impl CountryCode {
    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CountryCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

/// A country known to the game: code plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Country {
    /// Identifier used to look up the flag.
    #[new(into)]
    pub code: CountryCode,
    /// Name shown to the player.
    #[new(into)]
    pub name: String,
}

/// The three flags shown in a round.
///
/// Always holds exactly [`CANDIDATE_COUNT`] distinct codes; the engine is the
/// only place that builds one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateSet([CountryCode; CANDIDATE_COUNT]);

impl CandidateSet {
    /// Builds a set from the first three entries of a shuffled pool.
    ///
    /// Returns `None` if the pool has fewer than three entries.
    pub(crate) fn from_pool(pool: &[CountryCode]) -> Option<Self> {
        match pool {
            [a, b, c, ..] => Some(Self([a.clone(), b.clone(), c.clone()])),
            _ => None,
        }
    }

    /// Returns the candidate at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&CountryCode> {
        self.0.get(index)
    }

    /// Returns the candidates in display order.
    pub fn as_slice(&self) -> &[CountryCode] {
        &self.0
    }

    /// Position of `code` within the set.
    pub fn position(&self, code: &CountryCode) -> Option<usize> {
        self.0.iter().position(|c| c == code)
    }

    /// Number of candidates (always three).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// One round: the candidates on screen and which of them is the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    round_number: u32,
    candidates: CandidateSet,
    correct_index: usize,
    target_name: String,
}

impl RoundState {
    pub(crate) fn new(
        round_number: u32,
        candidates: CandidateSet,
        correct_index: usize,
        target_name: String,
    ) -> Self {
        Self {
            round_number,
            candidates,
            correct_index,
            target_name,
        }
    }

    /// 1-based round number.
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Candidate flags in display order.
    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Index of the target within [`Self::candidates`].
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// Code of the target country.
    pub fn target(&self) -> &CountryCode {
        &self.candidates.0[self.correct_index]
    }

    /// Display name of the target country.
    pub fn target_name(&self) -> &str {
        &self.target_name
    }
}

/// Result of evaluating a guess.
///
/// Returned by value from `submit_guess`; the engine keeps its own copy only
/// to answer "has this round been answered".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessOutcome {
    /// Whether the chosen flag was the target.
    pub correct: bool,
    /// Index the player picked.
    pub chosen_index: usize,
    /// Index of the target.
    pub correct_index: usize,
    /// Score after applying this guess.
    pub score_after: i32,
    /// True if this was the last round of the session.
    pub is_final_round: bool,
    /// Country the player picked.
    pub chosen: CountryCode,
    /// Country that was the target.
    pub target: CountryCode,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(raw: &[&str]) -> Vec<CountryCode> {
        raw.iter().map(|c| CountryCode::from(*c)).collect()
    }

    #[test]
    fn test_candidate_set_takes_first_three() {
        let set = CandidateSet::from_pool(&codes(&["a", "b", "c", "d"])).expect("pool large enough");
        assert_eq!(set.as_slice(), codes(&["a", "b", "c"]).as_slice());
        assert_eq!(set.position(&"c".into()), Some(2));
        assert_eq!(set.position(&"d".into()), None);
    }

    #[test]
    fn test_candidate_set_rejects_short_pool() {
        assert!(CandidateSet::from_pool(&codes(&["a", "b"])).is_none());
    }

    #[test]
    fn test_round_target_follows_correct_index() {
        let set = CandidateSet::from_pool(&codes(&["fr", "de", "it"])).unwrap();
        let round = RoundState::new(1, set, 1, "Germany".to_string());
        assert_eq!(round.target().as_str(), "de");
        assert_eq!(round.target_name(), "Germany");
    }
}
