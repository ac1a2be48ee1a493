//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dicegame")]
#[command(about = "Guess the sum of the dice, keep a leaderboard")]
#[command(version)]
pub struct Args {
    /// Score file location
    #[arg(short, long, env = "DICEGAME_SCORES", default_value = "scores.json")]
    pub scores: PathBuf,

    /// Fixed seed for the dice (for reproducible games)
    #[arg(long, env = "DICEGAME_SEED")]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Play interactively (default)
    Play {
        /// Faces per die
        #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u32).range(1..))]
        sides: u32,

        /// Most dice per round
        #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
        max_dice: u32,
    },
    /// Print the leaderboard and exit
    Scores {
        /// Number of rows to show
        #[arg(short, long, default_value_t = 10)]
        top: usize,
    },
}
