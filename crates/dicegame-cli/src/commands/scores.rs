//! Leaderboard command.

use dicegame::{ScoreManager, format_leaderboard};
use owo_colors::OwoColorize;

/// Print the best `top` scores
pub fn run(manager: &ScoreManager, top: usize) {
    println!(
        "{} ({} rounds recorded in {})",
        "High scores".bold(),
        manager.len(),
        manager.path().display()
    );
    println!("{}", format_leaderboard(&manager.high_scores(), top));
}
