//! Tests for configuration loading.

use guess_the_flag::GameConfig;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();

    assert_eq!(config, GameConfig::default());
    assert_eq!(config.high_score_path(), &PathBuf::from("guess_the_flag_score.toml"));
    assert!(config.countries_path().is_none());
    assert!(config.seed().is_none());
}

#[test]
fn test_from_file_reads_all_fields() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("guess_the_flag.toml");
    std::fs::write(
        &path,
        "high_score_path = \"scores/best.toml\"\ncountries_path = \"europe.toml\"\nseed = 17\n",
    )
    .unwrap();

    let config = GameConfig::from_file(&path).unwrap();
    assert_eq!(config.high_score_path(), &PathBuf::from("scores/best.toml"));
    assert_eq!(config.countries_path(), &Some(PathBuf::from("europe.toml")));
    assert_eq!(config.seed(), &Some(17));
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("guess_the_flag.toml");
    std::fs::write(&path, "seed = 3\n").unwrap();

    let config = GameConfig::load_or_default(&path).unwrap();
    assert_eq!(config.high_score_path(), &PathBuf::from("guess_the_flag_score.toml"));
    assert_eq!(config.seed(), &Some(3));
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("guess_the_flag.toml");
    std::fs::write(&path, "seed = \"not a number\"\n").unwrap();

    let err = GameConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_overrides_replace_file_values() {
    let config = GameConfig::default().with_overrides(
        Some(PathBuf::from("other.toml")),
        None,
        Some(99),
    );

    assert_eq!(config.high_score_path(), &PathBuf::from("other.toml"));
    assert!(config.countries_path().is_none());
    assert_eq!(config.seed(), &Some(99));

    let unchanged = config.clone().with_overrides(None, None, None);
    assert_eq!(unchanged, config);
}
