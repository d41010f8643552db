//! Tests for high-score reconciliation and persistence.

use guess_the_flag::{
    CountryUniverse, FileHighScore, GameRng, HighScoreStore, MemoryHighScore, SessionEngine,
    StoreError, Transition,
};
use tempfile::TempDir;

/// Store whose reads and writes always fail.
#[derive(Debug, Default)]
struct BrokenStore {
    write_attempts: usize,
}

impl HighScoreStore for BrokenStore {
    fn read_high_score(&self) -> Result<i32, StoreError> {
        Err(StoreError::new("disk unavailable"))
    }

    fn write_high_score(&mut self, _score: i32) -> Result<(), StoreError> {
        self.write_attempts += 1;
        Err(StoreError::new("disk unavailable"))
    }
}

/// Plays one full game, guessing right in the rounds where `pattern` is true.
fn play<S: HighScoreStore>(engine: &mut SessionEngine<GameRng, S>, pattern: &[bool; 10]) -> i32 {
    engine.start_new_game();
    for &right in pattern {
        let correct = engine.present_round().unwrap().correct_index();
        let index = if right { correct } else { (correct + 1) % 3 };
        engine.submit_guess(index).unwrap();
        if let Transition::GameOver(summary) = engine.advance_round().unwrap() {
            return summary.final_score;
        }
    }
    panic!("Game should end after ten rounds");
}

#[test]
fn test_high_score_loaded_at_construction() {
    let engine = SessionEngine::new(CountryUniverse::builtin(), GameRng::new(1), MemoryHighScore::new(6));
    assert_eq!(engine.high_score(), 6);
}

#[test]
fn test_better_score_is_written_once() {
    let mut engine = SessionEngine::new(CountryUniverse::builtin(), GameRng::new(2), MemoryHighScore::new(3));

    let final_score = play(&mut engine, &[true; 10]);
    assert_eq!(final_score, 10);
    assert_eq!(engine.high_score(), 10);
    assert_eq!(engine.store().value(), 10);
    assert_eq!(engine.store().writes(), 1);
}

#[test]
fn test_worse_score_keeps_high_score() {
    let mut engine = SessionEngine::new(CountryUniverse::builtin(), GameRng::new(3), MemoryHighScore::new(4));

    let final_score = play(&mut engine, &[false; 10]);
    assert_eq!(final_score, -10);
    assert_eq!(engine.high_score(), 4);
    assert_eq!(engine.store().writes(), 0);
}

#[test]
fn test_equal_score_is_not_written() {
    let mut engine = SessionEngine::new(CountryUniverse::builtin(), GameRng::new(4), MemoryHighScore::new(2));

    let pattern = [true, true, true, true, true, true, false, false, false, false];
    assert_eq!(play(&mut engine, &pattern), 2);
    assert_eq!(engine.store().writes(), 0);
}

#[test]
fn test_high_score_never_decreases_across_sessions() {
    let mut engine = SessionEngine::new(CountryUniverse::builtin(), GameRng::new(5), MemoryHighScore::new(0));

    let patterns = [
        [true, false, true, true, false, true, true, true, false, true],
        [false; 10],
        [true; 10],
        [true, false, false, false, false, false, false, false, false, false],
    ];

    let mut expected = 0;
    for pattern in &patterns {
        let final_score = play(&mut engine, pattern);
        expected = expected.max(final_score);
        assert_eq!(engine.high_score(), expected);
    }
    assert_eq!(engine.store().value(), 10);
}

#[test]
fn test_broken_store_degrades_to_zero() {
    let mut engine = SessionEngine::new(CountryUniverse::builtin(), GameRng::new(6), BrokenStore::default());
    assert_eq!(engine.high_score(), 0);

    let final_score = play(&mut engine, &[true; 10]);
    assert_eq!(final_score, 10);
    assert!(engine.is_game_over());
    assert_eq!(engine.high_score(), 10);
    assert_eq!(engine.store().write_attempts, 1);
}

#[test]
fn test_file_store_survives_new_engine() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("score.toml");

    let mut engine = SessionEngine::new(CountryUniverse::builtin(), GameRng::new(7), FileHighScore::new(&path));
    assert_eq!(engine.high_score(), 0);
    play(&mut engine, &[true, true, true, true, true, true, true, false, true, true]);
    assert_eq!(engine.high_score(), 8);

    let engine = SessionEngine::new(CountryUniverse::builtin(), GameRng::new(8), FileHighScore::new(&path));
    assert_eq!(engine.high_score(), 8);
}

#[test]
fn test_start_picks_up_external_store_changes() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("score.toml");

    let mut engine = SessionEngine::new(CountryUniverse::builtin(), GameRng::new(9), FileHighScore::new(&path));
    assert_eq!(engine.high_score(), 0);

    // Another session wrote a better score in the meantime.
    FileHighScore::new(&path).write_high_score(5).unwrap();
    engine.start_new_game();
    assert_eq!(engine.high_score(), 5);
}
