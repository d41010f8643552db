//! Guess the Flag library - round-based flag guessing game
//!
//! The player sees three flags and a country name, picks the matching flag,
//! and scores over ten rounds. The best score survives between sessions.
//!
//! # Architecture
//!
//! - **Engine**: [`SessionEngine`] owns the session state machine
//! - **Contracts**: Pre/postconditions and invariants guard every transition
//! - **Store**: [`HighScoreStore`] persists the single high score
//! - **TUI**: Terminal front end driving the engine
//!
//! # Example
//!
//! ```
//! use guess_the_flag::{CountryUniverse, GameRng, MemoryHighScore, SessionEngine, Transition};
//!
//! let mut engine = SessionEngine::new(
//!     CountryUniverse::builtin(),
//!     GameRng::new(42),
//!     MemoryHighScore::default(),
//! );
//! engine.start_new_game();
//!
//! let correct = engine.present_round().unwrap().correct_index();
//! let outcome = engine.submit_guess(correct).unwrap();
//! assert!(outcome.correct);
//! assert!(matches!(engine.advance_round().unwrap(), Transition::NextRound(_)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod store;

pub mod cli;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Store
pub use store::{FileHighScore, HighScoreStore, MemoryHighScore, StoreError};

// Crate-level exports - Game types
pub use games::flags::{
    Advance, AdvanceContract, CANDIDATE_COUNT, CandidateSet, Contract, Country, CountryCode,
    CountryUniverse, FlagInvariants, GameRng, GameSummary, Guess, GuessContract, GuessOutcome,
    Invariant, InvariantSet, InvariantViolation, RandomSource, RoundPhase, RoundState,
    SessionEngine, SessionError, SessionState, StateViolation, TOTAL_ROUNDS, Transition,
    UniverseError,
};
