//! Tests for the session engine state machine.

use guess_the_flag::{
    Country, CountryCode, CountryUniverse, MemoryHighScore, RandomSource, RoundPhase,
    SessionEngine, SessionError, StateViolation, Transition,
};

/// Leaves the pool in table order and replays a fixed list of picks.
struct ScriptedRandom {
    picks: Vec<usize>,
    next: usize,
}

impl ScriptedRandom {
    fn new(picks: Vec<usize>) -> Self {
        Self { picks, next: 0 }
    }
}

impl RandomSource for ScriptedRandom {
    fn shuffle(&mut self, _pool: &mut [CountryCode]) {}

    fn pick_index(&mut self, upper: usize) -> usize {
        let pick = self.picks[self.next % self.picks.len()];
        self.next += 1;
        pick % upper
    }
}

fn five_countries() -> CountryUniverse {
    CountryUniverse::new(vec![
        Country::new("A", "Alpha"),
        Country::new("B", "Bravo"),
        Country::new("C", "Charlie"),
        Country::new("D", "Delta"),
        Country::new("E", "Echo"),
    ])
    .expect("valid universe")
}

fn engine(picks: Vec<usize>, high_score: i32) -> SessionEngine<ScriptedRandom, MemoryHighScore> {
    SessionEngine::new(
        five_countries(),
        ScriptedRandom::new(picks),
        MemoryHighScore::new(high_score),
    )
}

fn wrong_index(correct: usize) -> usize {
    (correct + 1) % 3
}

#[test]
fn test_first_round_is_valid() {
    let mut engine = engine(vec![0], 0);
    engine.start_new_game();

    let round = engine.present_round().expect("round 1 on screen");
    assert_eq!(round.round_number(), 1);
    assert_eq!(round.candidates().len(), 3);
    assert!(round.correct_index() < 3);

    let universe = five_countries();
    for code in round.candidates().as_slice() {
        assert!(universe.name(code).is_some());
    }
    assert_eq!(
        Some(round.target_name()),
        universe.name(round.target())
    );
}

#[test]
fn test_scripted_deal() {
    let mut engine = engine(vec![0], 0);
    engine.start_new_game();

    let round = engine.present_round().unwrap();
    let codes: Vec<&str> = round.candidates().as_slice().iter().map(|c| c.as_str()).collect();
    assert_eq!(codes, vec!["A", "B", "C"]);
    assert_eq!(round.target_name(), "Alpha");

    engine.submit_guess(0).unwrap();
    let next = match engine.advance_round().unwrap() {
        Transition::NextRound(next) => next,
        Transition::GameOver(_) => panic!("Game shouldn't end after one round"),
    };

    // "A" was just revealed, so it's dropped from the next pool.
    let codes: Vec<&str> = next.candidates().as_slice().iter().map(|c| c.as_str()).collect();
    assert_eq!(codes, vec!["B", "C", "D"]);
    assert_eq!(next.round_number(), 2);
}

#[test]
fn test_correct_guess_scores() {
    let mut engine = engine(vec![1], 0);
    engine.start_new_game();

    let correct = engine.present_round().unwrap().correct_index();
    let outcome = engine.submit_guess(correct).unwrap();

    assert!(outcome.correct);
    assert_eq!(outcome.chosen_index, correct);
    assert_eq!(outcome.correct_index, correct);
    assert_eq!(outcome.score_after, 1);
    assert!(!outcome.is_final_round);
    assert_eq!(outcome.chosen, outcome.target);
    assert_eq!(engine.score(), 1);
}

#[test]
fn test_wrong_guess_goes_negative() {
    let mut engine = engine(vec![2], 0);
    engine.start_new_game();

    let correct = engine.present_round().unwrap().correct_index();
    let outcome = engine.submit_guess(wrong_index(correct)).unwrap();

    assert!(!outcome.correct);
    assert_eq!(outcome.score_after, -1);
    assert_ne!(outcome.chosen, outcome.target);
    assert_eq!(engine.score(), -1);
}

#[test]
fn test_present_and_advance_do_not_score() {
    let mut engine = engine(vec![0, 1, 2], 0);
    engine.start_new_game();

    let correct = engine.present_round().unwrap().correct_index();
    engine.submit_guess(correct).unwrap();
    assert_eq!(engine.score(), 1);

    engine.present_round().unwrap();
    assert_eq!(engine.score(), 1);

    engine.advance_round().unwrap();
    assert_eq!(engine.score(), 1);
}

#[test]
fn test_present_round_is_idempotent() {
    let mut engine = engine(vec![2], 0);
    engine.start_new_game();

    let first = engine.present_round().unwrap().clone();
    let second = engine.present_round().unwrap().clone();
    assert_eq!(first, second);

    // Still the same round after answering, until advanced.
    engine.submit_guess(0).unwrap();
    assert_eq!(engine.present_round().unwrap(), &first);
}

#[test]
fn test_alternating_game_scores_zero() {
    let mut engine = engine(vec![0, 2, 1], 0);
    engine.start_new_game();

    let mut previous_target: Option<CountryCode> = None;
    for round_number in 1..=10u32 {
        let round = engine.present_round().unwrap().clone();
        assert_eq!(round.round_number(), round_number);
        if let Some(previous) = &previous_target {
            assert!(round.candidates().position(previous).is_none());
        }

        let index = if round_number % 2 == 1 {
            round.correct_index()
        } else {
            wrong_index(round.correct_index())
        };
        let outcome = engine.submit_guess(index).unwrap();
        assert_eq!(outcome.is_final_round, round_number == 10);
        assert_eq!(outcome.score_after, if round_number % 2 == 1 { 1 } else { 0 });

        previous_target = Some(round.target().clone());
        let transition = engine.advance_round().unwrap();
        assert_eq!(matches!(transition, Transition::GameOver(_)), round_number == 10);
    }

    assert!(engine.is_game_over());
    assert_eq!(engine.rounds_played(), 10);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.high_score(), 0);
    assert_eq!(engine.store().writes(), 0);
}

#[test]
fn test_double_guess_rejected() {
    let mut engine = engine(vec![0], 0);
    engine.start_new_game();

    engine.submit_guess(0).unwrap();
    let before = engine.state().clone();

    assert_eq!(
        engine.submit_guess(1),
        Err(SessionError::InvalidState(StateViolation::AlreadyAnswered))
    );
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_out_of_range_guess_rejected() {
    let mut engine = engine(vec![0], 0);
    engine.start_new_game();
    let before = engine.state().clone();

    assert_eq!(engine.submit_guess(5), Err(SessionError::InvalidInput { index: 5 }));
    assert_eq!(engine.submit_guess(3), Err(SessionError::InvalidInput { index: 3 }));
    assert_eq!(engine.state(), &before);

    // The round can still be answered normally.
    assert!(engine.submit_guess(2).is_ok());
}

#[test]
fn test_advance_unanswered_rejected() {
    let mut engine = engine(vec![0], 0);
    engine.start_new_game();
    let before = engine.state().clone();

    assert_eq!(
        engine.advance_round(),
        Err(SessionError::InvalidState(StateViolation::NotAnswered))
    );
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_operations_after_game_over_rejected() {
    let mut engine = engine(vec![0], 0);
    engine.start_new_game();
    for _ in 0..10 {
        engine.submit_guess(0).unwrap();
        engine.advance_round().unwrap();
    }
    assert!(engine.is_game_over());
    assert_eq!(engine.state().phase(), &RoundPhase::GameOver);
    let before = engine.state().clone();

    let game_over = SessionError::InvalidState(StateViolation::GameOver);
    assert_eq!(engine.present_round(), Err(game_over.clone()));
    assert_eq!(engine.submit_guess(0), Err(game_over.clone()));
    assert_eq!(engine.advance_round(), Err(game_over));
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_new_game_after_game_over() {
    let mut engine = engine(vec![1], 0);
    engine.start_new_game();
    for _ in 0..10 {
        let correct = engine.present_round().unwrap().correct_index();
        engine.submit_guess(correct).unwrap();
        engine.advance_round().unwrap();
    }
    assert_eq!(engine.high_score(), 10);

    engine.start_new_game();
    assert!(!engine.is_game_over());
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.rounds_played(), 0);
    assert_eq!(engine.high_score(), 10);
    assert_eq!(engine.present_round().unwrap().round_number(), 1);
}
