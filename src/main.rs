//! Guess the Flag - CLI entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use guess_the_flag::cli::{Cli, Command};
use guess_the_flag::{
    CountryUniverse, FileHighScore, GameConfig, GameRng, HighScoreStore, SessionEngine,
};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            seed,
            countries,
            high_score,
        } => {
            let config = GameConfig::load_or_default(&cli.config)?
                .with_overrides(high_score, countries, seed);
            run_play(config)
        }
        Command::HighScore => {
            initialize_tracing();
            let config = GameConfig::load_or_default(&cli.config)?;
            let store = FileHighScore::new(config.high_score_path());
            let score = store.read_high_score()?;
            println!("High score: {}", score);
            Ok(())
        }
        Command::Countries { json } => {
            initialize_tracing();
            let config = GameConfig::load_or_default(&cli.config)?;
            let universe = load_universe(&config)?;
            print_countries(&universe, json)
        }
    }
}

/// Run the terminal game
fn run_play(config: GameConfig) -> Result<()> {
    let universe = load_universe(&config)?;
    let rng = match config.seed() {
        Some(seed) => GameRng::new(*seed),
        None => GameRng::from_entropy(),
    };
    let store = FileHighScore::new(config.high_score_path());

    let seed = rng.seed();
    let engine = SessionEngine::new(universe, rng, store);
    guess_the_flag::tui::run_tui(engine)?;
    info!(seed, "Session finished");
    Ok(())
}

#[instrument(skip(config))]
fn load_universe(config: &GameConfig) -> Result<CountryUniverse> {
    match config.countries_path() {
        Some(path) => CountryUniverse::from_file(path)
            .with_context(|| format!("Failed to load countries from {}", path.display())),
        None => Ok(CountryUniverse::builtin()),
    }
}

fn print_countries(universe: &CountryUniverse, json: bool) -> Result<()> {
    if json {
        let countries: Vec<_> = universe.iter().collect();
        println!("{}", serde_json::to_string_pretty(&countries)?);
    } else {
        for country in universe.iter() {
            println!("{:<8} {}", country.code.as_str(), country.name);
        }
    }
    Ok(())
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,guess_the_flag=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
