//! Configuration for the score manager and the game session.

use std::path::PathBuf;

use crate::dice::DEFAULT_SIDES;
use crate::error::{Error, Result};
use crate::storage::DEFAULT_SCORES_FILE;

/// Configuration for [`ScoreManager`](crate::ScoreManager)
#[derive(Debug, Clone)]
pub struct ScoreManagerConfig {
    /// Score file location
    pub scores_path: PathBuf,
    /// Fixed RNG seed; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for ScoreManagerConfig {
    fn default() -> Self {
        Self {
            scores_path: PathBuf::from(DEFAULT_SCORES_FILE),
            seed: None,
        }
    }
}

impl ScoreManagerConfig {
    /// Create a new configuration builder
    pub fn builder() -> ScoreManagerConfigBuilder {
        ScoreManagerConfigBuilder::default()
    }
}

/// Builder for ScoreManagerConfig
#[derive(Debug, Clone, Default)]
pub struct ScoreManagerConfigBuilder {
    scores_path: Option<PathBuf>,
    seed: Option<u64>,
}

impl ScoreManagerConfigBuilder {
    /// Set the score file path
    pub fn scores_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.scores_path = Some(path.into());
        self
    }

    /// Use a fixed RNG seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the configuration
    pub fn build(self) -> ScoreManagerConfig {
        let default = ScoreManagerConfig::default();
        ScoreManagerConfig {
            scores_path: self.scores_path.unwrap_or(default.scores_path),
            seed: self.seed.or(default.seed),
        }
    }
}

/// Rules for an interactive game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Faces per die
    pub sides: u32,
    /// Most dice a player may roll in one round
    pub max_dice: u32,
    /// Rows shown on the leaderboard after each round
    pub leaderboard_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            sides: DEFAULT_SIDES,
            max_dice: 5,
            leaderboard_size: 3,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sides == 0 {
            return Err(Error::InvalidConfig("dice need at least one side".into()));
        }
        if self.max_dice == 0 {
            return Err(Error::InvalidConfig(
                "at least one die must be allowed".into(),
            ));
        }
        Ok(())
    }
}
