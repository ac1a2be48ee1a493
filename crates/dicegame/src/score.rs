//! Score records and the proximity scoring formula.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Name stored when the player leaves the name prompt empty
pub const DEFAULT_PLAYER_NAME: &str = "Anonymous";

/// One completed round
///
/// Field order matches the on-disk record layout. Only `score` is required
/// when reading a file; older or hand-edited records may lack the rest, and
/// absent fields stay absent when the file is rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    pub score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dice_count: Option<u32>,
    #[serde(
        rename = "user_guess",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub guess: Option<i64>,
}

impl ScoreEntry {
    /// Build an entry, substituting [`DEFAULT_PLAYER_NAME`] for an empty name.
    ///
    /// Returns `Error::InvalidDiceCount` if `dice_count` is zero.
    pub fn new(name: &str, score: u32, dice_count: u32, guess: i64) -> Result<Self> {
        if dice_count == 0 {
            return Err(Error::InvalidDiceCount(dice_count));
        }

        let name = if name.is_empty() {
            DEFAULT_PLAYER_NAME
        } else {
            name
        };

        Ok(Self {
            name: name.to_string(),
            score,
            dice_count: Some(dice_count),
            guess: Some(guess),
        })
    }

    /// False for records claiming zero dice
    pub fn is_valid(&self) -> bool {
        self.dice_count != Some(0)
    }
}

/// Score a guess against the rolled total.
///
/// `max(0, max_possible_score - |actual_total - guess|)`. Never panics, even
/// for guesses far outside the rollable range.
pub fn score_guess(actual_total: u64, guess: i64, max_possible_score: u32) -> u32 {
    let error = (i128::from(actual_total) - i128::from(guess)).unsigned_abs();
    u32::try_from(error).map_or(0, |error| max_possible_score.saturating_sub(error))
}

/// Sort entries by score, highest first, keeping play order among ties.
pub fn rank(entries: &[ScoreEntry]) -> Vec<ScoreEntry> {
    let mut ranked = entries.to_vec();
    // sort_by is stable
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}
