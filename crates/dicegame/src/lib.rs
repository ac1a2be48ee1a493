//! # dicegame
//!
//! Core library for the dice guessing game.
//!
//! This crate provides:
//! - Dice simulation and the proximity scoring formula
//! - `ScoreManager`, which owns the score list and its JSON file
//! - A terminal session driver written against the `Prompter` trait
//!
//! The `dicegame-cli` crate wires these to stdin/stdout.

pub mod config;
pub mod diagnostic;
pub mod dice;
pub mod error;
pub mod manager;
pub mod score;
pub mod session;
pub mod storage;

pub use config::{GameConfig, ScoreManagerConfig, ScoreManagerConfigBuilder};
pub use diagnostic::{DiagnosticSink, TracingSink};
pub use dice::{DEFAULT_SIDES, DiceRoll, max_total, roll_dice_with};
pub use error::{Error, Result};
pub use manager::ScoreManager;
pub use score::{DEFAULT_PLAYER_NAME, ScoreEntry, rank, score_guess};
pub use session::{
    MISSING_FIELD, Prompter, RestartAnswer, RoundOutcome, ScriptedPrompter, TerminalSession,
    format_leaderboard,
};
pub use storage::{DEFAULT_SCORES_FILE, load_scores, save_scores, write_scores};
