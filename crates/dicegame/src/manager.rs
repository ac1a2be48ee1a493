//! Score manager: dice, scoring, persistence and ranking.
//!
//! ## Example
//!
//! ```ignore
//! use dicegame::{ScoreManager, ScoreManagerConfig};
//!
//! let config = ScoreManagerConfig::builder()
//!     .scores_path("scores.json")
//!     .build();
//! let mut manager = ScoreManager::load(config);
//!
//! let roll = manager.roll_dice(3, 6)?;
//! let score = manager.score_guess(roll.total, 11, 18);
//! manager.add_score("Ana", score, 3, 11)?;
//!
//! for entry in manager.high_scores() {
//!     println!("{} {}", entry.name, entry.score);
//! }
//! ```

use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::config::ScoreManagerConfig;
use crate::diagnostic::{DiagnosticSink, TracingSink};
use crate::dice::{DiceRoll, roll_dice_with};
use crate::error::Result;
use crate::score::{self, ScoreEntry};
use crate::storage;

/// Owns the score list and its backing file for the life of the process
pub struct ScoreManager {
    config: ScoreManagerConfig,
    scores: Vec<ScoreEntry>,
    rng: StdRng,
}

impl ScoreManager {
    /// Load saved scores, reporting load problems through `tracing`.
    pub fn load(config: ScoreManagerConfig) -> Self {
        Self::load_with_sink(config, &TracingSink)
    }

    /// Load saved scores, reporting load problems to `sink`.
    ///
    /// Load problems are never fatal: the manager starts with an empty list.
    pub fn load_with_sink(config: ScoreManagerConfig, sink: &dyn DiagnosticSink) -> Self {
        let scores = storage::load_scores(&config.scores_path, sink);
        let rng = match config.seed {
            Some(seed) => {
                debug!("Using fixed dice seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };

        info!(
            "Score manager ready ({} scores from {})",
            scores.len(),
            config.scores_path.display()
        );

        Self {
            config,
            scores,
            rng,
        }
    }

    /// Roll `count` dice with `sides` faces.
    pub fn roll_dice(&mut self, count: u32, sides: u32) -> Result<DiceRoll> {
        roll_dice_with(&mut self.rng, count, sides)
    }

    /// See [`score::score_guess`].
    pub fn score_guess(&self, actual_total: u64, guess: i64, max_possible_score: u32) -> u32 {
        score::score_guess(actual_total, guess, max_possible_score)
    }

    /// Record a finished round and rewrite the score file.
    ///
    /// A zero `dice_count` is rejected with `Error::InvalidDiceCount` before
    /// anything is stored. Otherwise the entry is kept in memory even when
    /// saving fails; the save error is returned to the caller.
    pub fn add_score(
        &mut self,
        name: &str,
        score: u32,
        dice_count: u32,
        guess: i64,
    ) -> Result<()> {
        let entry = ScoreEntry::new(name, score, dice_count, guess)?;
        debug!(
            "Adding score: name={}, score={}, dice={}, guess={}",
            entry.name, score, dice_count, guess
        );
        self.scores.push(entry);
        storage::save_scores(&self.config.scores_path, &self.scores)
    }

    /// All entries, highest score first, ties in play order.
    pub fn high_scores(&self) -> Vec<ScoreEntry> {
        score::rank(&self.scores)
    }

    /// The best `n` entries.
    pub fn top(&self, n: usize) -> Vec<ScoreEntry> {
        let mut ranked = self.high_scores();
        ranked.truncate(n);
        ranked
    }

    /// Entries in play order
    pub fn scores(&self) -> &[ScoreEntry] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Score file location
    pub fn path(&self) -> &Path {
        &self.config.scores_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::score::DEFAULT_PLAYER_NAME;
    use std::cell::RefCell;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::{TempDir, tempdir};

    fn setup() -> (TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scores.json");
        (dir, path)
    }

    fn manager_at(path: &Path) -> ScoreManager {
        let config = ScoreManagerConfig::builder()
            .scores_path(path)
            .seed(1)
            .build();
        ScoreManager::load(config)
    }

    #[test]
    fn test_starts_empty_without_file() {
        let (_dir, path) = setup();
        let manager = manager_at(&path);
        assert!(manager.is_empty());
        assert_eq!(manager.path(), path.as_path());
    }

    #[test]
    fn test_add_score_appends_one_entry() {
        let (_dir, path) = setup();
        let mut manager = manager_at(&path);

        manager.add_score("Ana", 12, 3, 11).unwrap();
        assert_eq!(manager.len(), 1);
        manager.add_score("Bo", 4, 1, 2).unwrap();
        assert_eq!(manager.len(), 2);

        let last = manager.scores().last().unwrap();
        assert_eq!(last.name, "Bo");

        let first = &manager.scores()[0];
        assert_eq!(first.name, "Ana");
        assert_eq!(first.score, 12);
        assert_eq!(first.dice_count, Some(3));
        assert_eq!(first.guess, Some(11));
    }

    #[test]
    fn test_add_score_zero_dice_rejected() {
        let (_dir, path) = setup();
        let mut manager = manager_at(&path);
        manager.add_score("Ana", 12, 3, 11).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        let err = manager.add_score("Bo", 5, 0, 3).unwrap_err();

        assert!(matches!(err, Error::InvalidDiceCount(0)));
        assert_eq!(manager.len(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_add_score_keeps_name_verbatim() {
        let (_dir, path) = setup();
        let mut manager = manager_at(&path);

        manager.add_score("  Ana ", 3, 2, 5).unwrap();
        assert_eq!(manager.scores()[0].name, "  Ana ");
    }

    #[test]
    fn test_partial_records_survive_a_save() {
        let (_dir, path) = setup();
        fs::write(
            &path,
            r#"[{"name": "A", "score": 2}, {"name": "B", "score": 10, "dice_count": 2, "user_guess": 7}]"#,
        )
        .unwrap();
        let mut manager = manager_at(&path);
        assert_eq!(manager.len(), 2);

        manager.add_score("C", 5, 1, 4).unwrap();

        let reloaded = manager_at(&path);
        let names: Vec<_> = reloaded.high_scores().into_iter().map(|e| e.name).collect();
        assert_eq!(names, ["B", "C", "A"]);
        assert_eq!(reloaded.scores()[0].dice_count, None);
    }

    #[test]
    fn test_add_score_empty_name() {
        let (_dir, path) = setup();
        let mut manager = manager_at(&path);

        manager.add_score("", 3, 2, 5).unwrap();
        assert_eq!(manager.scores()[0].name, DEFAULT_PLAYER_NAME);
    }

    #[test]
    fn test_add_score_writes_file() {
        let (_dir, path) = setup();
        let mut manager = manager_at(&path);

        manager.add_score("Ülgen", 12, 3, 11).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"name\": \"Ülgen\""));
        assert!(content.contains("    {"));
    }

    #[test]
    fn test_round_trip_through_fresh_manager() {
        let (_dir, path) = setup();
        let mut manager = manager_at(&path);
        manager.add_score("A", 2, 1, 3).unwrap();
        manager.add_score("B", 10, 2, 7).unwrap();
        manager.add_score("", 5, 4, 14).unwrap();

        let reloaded = manager_at(&path);
        assert_eq!(reloaded.scores(), manager.scores());
    }

    #[test]
    fn test_high_scores_sorted() {
        let (_dir, path) = setup();
        let mut manager = manager_at(&path);
        manager.add_score("A", 2, 1, 3).unwrap();
        manager.add_score("B", 10, 2, 7).unwrap();
        manager.add_score("C", 5, 1, 4).unwrap();

        let names: Vec<_> = manager.high_scores().into_iter().map(|e| e.name).collect();
        assert_eq!(names, ["B", "C", "A"]);

        // Store keeps play order
        let names: Vec<_> = manager.scores().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn test_top_limits_rows() {
        let (_dir, path) = setup();
        let mut manager = manager_at(&path);
        for (name, score) in [("A", 1), ("B", 4), ("C", 3), ("D", 2)] {
            manager.add_score(name, score, 1, 1).unwrap();
        }

        let names: Vec<_> = manager.top(3).into_iter().map(|e| e.name).collect();
        assert_eq!(names, ["B", "C", "D"]);
        assert_eq!(manager.top(10).len(), 4);
    }

    #[test]
    fn test_corrupt_file_reports_once_and_is_overwritten() {
        let (_dir, path) = setup();
        fs::write(&path, "not json at all").unwrap();
        let warnings = RefCell::new(Vec::new());
        let sink = |m: &str| warnings.borrow_mut().push(m.to_string());

        let config = ScoreManagerConfig::builder().scores_path(&path).build();
        let mut manager = ScoreManager::load_with_sink(config, &sink);
        assert!(manager.is_empty());
        assert_eq!(warnings.borrow().len(), 1);

        manager.add_score("Ana", 12, 3, 11).unwrap();
        let reloaded = manager_at(&path);
        assert_eq!(reloaded.len(), 1);
    }

    #[test]
    fn test_save_failure_is_returned() {
        let (dir, _) = setup();
        let path = dir.path().join("missing").join("scores.json");
        let mut manager = manager_at(&path);

        let err = manager.add_score("Ana", 12, 3, 11).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_roll_dice_uses_seed() {
        let (_dir, path) = setup();
        let mut a = manager_at(&path);
        let mut b = manager_at(&path);

        let roll = a.roll_dice(4, 6).unwrap();
        assert_eq!(roll, b.roll_dice(4, 6).unwrap());
        assert_eq!(roll.rolls.len(), 4);
        assert_eq!(roll.total, roll.rolls.iter().map(|&r| u64::from(r)).sum::<u64>());
    }

    #[test]
    fn test_score_guess_examples() {
        let (_dir, path) = setup();
        let manager = manager_at(&path);
        assert_eq!(manager.score_guess(10, 10, 20), 20);
        assert_eq!(manager.score_guess(10, 4, 20), 14);
        assert_eq!(manager.score_guess(3, 20, 5), 0);
    }
}
