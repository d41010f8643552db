//! Session engine: round generation, guess evaluation and transitions.

use super::action::{Advance, Guess, SessionError, StateViolation};
use super::contracts::{AdvanceContract, Contract, GuessContract, check_invariants};
use super::phases::RoundPhase;
use super::rng::RandomSource;
use super::state::SessionState;
use super::types::{CANDIDATE_COUNT, CandidateSet, CountryCode, GuessOutcome, RoundState};
use super::universe::CountryUniverse;
use crate::store::HighScoreStore;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// What happened when a round was advanced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// A new round is on screen.
    NextRound(RoundState),
    /// The final round was played.
    GameOver(GameSummary),
}

/// Result of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Score at the end of the last round.
    pub final_score: i32,
    /// High score after reconciliation.
    pub high_score: i32,
    /// True if this session set a new high score.
    pub new_high_score: bool,
}

/// Owns one play session and drives it round by round.
///
/// Hosts call [`start_new_game`](Self::start_new_game), then loop over
/// [`present_round`](Self::present_round),
/// [`submit_guess`](Self::submit_guess) and
/// [`advance_round`](Self::advance_round). Failed calls leave the session
/// untouched.
#[derive(Debug)]
pub struct SessionEngine<R, S> {
    universe: CountryUniverse,
    rng: R,
    store: S,
    state: SessionState,
}

impl<R: RandomSource, S: HighScoreStore> SessionEngine<R, S> {
    /// Creates an engine and loads the persisted high score.
    #[instrument(skip_all, fields(countries = universe.len()))]
    pub fn new(universe: CountryUniverse, rng: R, store: S) -> Self {
        let high_score = load_high_score(&store);
        info!(high_score, "Session engine ready");
        Self {
            universe,
            rng,
            store,
            state: SessionState::idle(high_score),
        }
    }

    /// Resets the session and deals round 1.
    ///
    /// Allowed from any phase; an unfinished game is abandoned without
    /// touching the high score.
    #[instrument(skip(self))]
    pub fn start_new_game(&mut self) {
        let high_score = load_high_score(&self.store).max(self.state.high_score);
        let round = self.draw_round(1, None);
        debug!(country = %round.target(), "Dealt first round");

        self.state = SessionState {
            round: Some(round),
            phase: RoundPhase::Unanswered,
            ..SessionState::idle(high_score)
        };
        debug_check(&self.state);
        info!(high_score, "New game started");
    }

    /// Returns the round on screen. Pure read; repeated calls agree.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidState`] before the first game or after game over.
    pub fn present_round(&self) -> Result<&RoundState, SessionError> {
        match self.state.phase {
            RoundPhase::NotStarted => Err(SessionError::InvalidState(StateViolation::NotStarted)),
            RoundPhase::GameOver => Err(SessionError::InvalidState(StateViolation::GameOver)),
            RoundPhase::Unanswered | RoundPhase::Answered(_) => self
                .state
                .round
                .as_ref()
                .ok_or(SessionError::InvalidState(StateViolation::NotStarted)),
        }
    }

    /// Evaluates a guess for the round on screen.
    ///
    /// Correct guesses add one point, wrong guesses take one away. The round
    /// is marked answered but not advanced.
    ///
    /// # Errors
    ///
    /// - [`SessionError::InvalidInput`] if `chosen_index` is not 0, 1 or 2.
    /// - [`SessionError::InvalidState`] if the round was already answered or
    ///   no round is on screen.
    #[instrument(skip(self), fields(round = self.state.rounds_played + 1, score = self.state.score))]
    pub fn submit_guess(&mut self, chosen_index: usize) -> Result<GuessOutcome, SessionError> {
        let guess = Guess::new(chosen_index);
        GuessContract::pre(&self.state, &guess)?;

        let round = self
            .state
            .round
            .as_ref()
            .ok_or(SessionError::InvalidState(StateViolation::NotStarted))?;
        let chosen = round
            .candidates()
            .get(guess.index)
            .cloned()
            .ok_or(SessionError::InvalidInput { index: guess.index })?;

        let correct = guess.index == round.correct_index();
        let score_after = if correct {
            self.state.score + 1
        } else {
            self.state.score - 1
        };
        let outcome = GuessOutcome {
            correct,
            chosen_index: guess.index,
            correct_index: round.correct_index(),
            score_after,
            is_final_round: self.state.rounds_played + 1 == self.state.total_rounds,
            chosen,
            target: round.target().clone(),
        };

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        self.state.score = score_after;
        self.state.phase = RoundPhase::Answered(outcome.clone());

        #[cfg(debug_assertions)]
        GuessContract::post(&before, &self.state)?;

        debug!(correct, score = score_after, "Guess evaluated");
        Ok(outcome)
    }

    /// Moves past an answered round.
    ///
    /// After the final round the game ends and the high score is reconciled:
    /// a better score is kept in memory and written to the store. A failed
    /// write is logged and does not fail the call.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidState`] unless the round on screen is answered.
    #[instrument(skip(self), fields(round = self.state.rounds_played + 1))]
    pub fn advance_round(&mut self) -> Result<Transition, SessionError> {
        AdvanceContract::pre(&self.state, &Advance)?;

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        let transition = if self.state.rounds_played + 1 == self.state.total_rounds {
            Transition::GameOver(self.finish_game())
        } else {
            let (next_number, previous_target) = match &self.state.round {
                Some(round) => (round.round_number() + 1, Some(round.target().clone())),
                None => (self.state.rounds_played + 2, None),
            };
            let next = self.draw_round(next_number, previous_target.as_ref());
            debug!(round = next_number, country = %next.target(), "Dealt next round");

            self.state.rounds_played += 1;
            self.state.round = Some(next.clone());
            self.state.phase = RoundPhase::Unanswered;
            Transition::NextRound(next)
        };

        #[cfg(debug_assertions)]
        AdvanceContract::post(&before, &self.state)?;

        Ok(transition)
    }

    /// Ends the session and reconciles the high score.
    fn finish_game(&mut self) -> GameSummary {
        let final_score = self.state.score;
        self.state.rounds_played = self.state.total_rounds;
        self.state.phase = RoundPhase::GameOver;

        let new_high_score = final_score > self.state.high_score;
        if new_high_score {
            self.state.high_score = final_score;
            if let Err(e) = self.store.write_high_score(final_score) {
                warn!(error = %e, "Failed to persist high score");
            }
        }

        info!(final_score, high_score = self.state.high_score, new_high_score, "Game over");
        GameSummary {
            final_score,
            high_score: self.state.high_score,
            new_high_score,
        }
    }

    /// Deals a round from the universe, keeping `previous_target` from
    /// becoming the target again.
    fn draw_round(&mut self, round_number: u32, previous_target: Option<&CountryCode>) -> RoundState {
        let mut pool: Vec<CountryCode> = self
            .universe
            .codes()
            .into_iter()
            .filter(|code| Some(code) != previous_target)
            .collect();

        let (candidates, correct_index) = if pool.len() >= CANDIDATE_COUNT {
            self.rng.shuffle(&mut pool);
            let candidates = CandidateSet::from_pool(&pool).expect("pool holds at least three countries");
            (candidates, self.rng.pick_index(CANDIDATE_COUNT))
        } else {
            // Universe of exactly three: every country is on screen, so only
            // the target position can avoid the previous target.
            let mut pool = self.universe.codes();
            self.rng.shuffle(&mut pool);
            let candidates = CandidateSet::from_pool(&pool).expect("universe holds at least three countries");
            let eligible: Vec<usize> = (0..CANDIDATE_COUNT)
                .filter(|&i| candidates.get(i) != previous_target)
                .collect();
            let correct_index = eligible[self.rng.pick_index(eligible.len())];
            (candidates, correct_index)
        };

        let target_name = candidates
            .get(correct_index)
            .and_then(|code| self.universe.name(code))
            .unwrap_or("Unknown")
            .to_string();
        RoundState::new(round_number, candidates, correct_index, target_name)
    }

    /// Full session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Current score.
    pub fn score(&self) -> i32 {
        self.state.score
    }

    /// Best score, in memory.
    pub fn high_score(&self) -> i32 {
        self.state.high_score
    }

    /// Rounds completed in this session.
    pub fn rounds_played(&self) -> u32 {
        self.state.rounds_played
    }

    /// Rounds per session.
    pub fn total_rounds(&self) -> u32 {
        self.state.total_rounds
    }

    /// True once the final round has been advanced past.
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Countries this engine draws from.
    pub fn universe(&self) -> &CountryUniverse {
        &self.universe
    }

    /// The high-score store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Reads the stored high score, treating an unavailable store as 0.
fn load_high_score<S: HighScoreStore>(store: &S) -> i32 {
    match store.read_high_score() {
        Ok(score) => score,
        Err(e) => {
            warn!(error = %e, "High score unavailable, starting from 0");
            0
        }
    }
}

fn debug_check(state: &SessionState) {
    debug_assert!(check_invariants(state).is_ok(), "Session invariants violated");
}
