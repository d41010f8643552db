//! Command-line interface for guess_the_flag.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Guess the Flag - pick the right flag out of three, ten rounds per game
#[derive(Parser, Debug)]
#[command(name = "guess_the_flag")]
#[command(about = "Flag guessing game for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "guess_the_flag.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Fixed RNG seed (replays the same deal)
        #[arg(long)]
        seed: Option<u64>,

        /// TOML file with [[country]] tables to use instead of the built-in list
        #[arg(long)]
        countries: Option<PathBuf>,

        /// File holding the high score
        #[arg(long)]
        high_score: Option<PathBuf>,
    },

    /// Print the stored high score
    HighScore,

    /// List the countries a game draws from
    Countries {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}
