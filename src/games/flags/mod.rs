//! Flag guessing game: session engine and its domain types.

mod action;
mod contracts;
mod engine;
mod invariants;
mod phases;
mod rng;
mod state;
mod types;
mod universe;

pub use action::{Advance, Guess, SessionError, StateViolation};
pub use contracts::{AdvanceContract, Contract, GuessContract};
pub use engine::{GameSummary, SessionEngine, Transition};
pub use invariants::{FlagInvariants, Invariant, InvariantSet, InvariantViolation};
pub use phases::RoundPhase;
pub use rng::{GameRng, RandomSource};
pub use state::SessionState;
pub use types::{
    CANDIDATE_COUNT, CandidateSet, Country, CountryCode, GuessOutcome, RoundState, TOTAL_ROUNDS,
};
pub use universe::{CountryUniverse, UniverseError};
