//! Interactive play command.

use anyhow::{Context, Result};
use dicegame::{Error, GameConfig, Prompter, ScoreManager, TerminalSession};
use tracing::info;

use crate::prompter::CliPrompter;

/// Run game rounds on the terminal until the player stops
pub fn run(manager: &mut ScoreManager, config: GameConfig) -> Result<()> {
    run_with(manager, CliPrompter, config)
}

/// Run game rounds with any prompter.
///
/// End of input is a normal exit; a failed read is an error.
pub fn run_with<P: Prompter>(
    manager: &mut ScoreManager,
    prompter: P,
    config: GameConfig,
) -> Result<()> {
    let mut session =
        TerminalSession::new(manager, prompter, config).context("Invalid game settings")?;

    match session.run() {
        Ok(rounds) => {
            info!("Played {} rounds", rounds);
            Ok(())
        }
        Err(Error::InputClosed) => {
            // stdin closed (Ctrl+D or piped input ran out)
            println!();
            info!("Input closed, leaving the game");
            Ok(())
        }
        Err(e) => Err(e).context("Game session failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicegame::{ScoreManagerConfig, ScriptedPrompter};
    use std::io;
    use tempfile::{TempDir, tempdir};

    struct BrokenStdin;

    impl Prompter for BrokenStdin {
        fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
            Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "stream did not contain valid UTF-8",
            ))
        }

        fn display_message(&mut self, _message: &str) {}

        fn display_warning(&mut self, _message: &str) {}
    }

    fn setup() -> (TempDir, ScoreManager) {
        let dir = tempdir().unwrap();
        let config = ScoreManagerConfig::builder()
            .scores_path(dir.path().join("scores.json"))
            .seed(5)
            .build();
        (dir, ScoreManager::load(config))
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let (_dir, mut manager) = setup();
        let prompter = ScriptedPrompter::new(["Ana", "2"]);
        assert!(run_with(&mut manager, prompter, GameConfig::default()).is_ok());
        assert!(manager.is_empty());
    }

    #[test]
    fn test_read_error_fails() {
        let (_dir, mut manager) = setup();
        let err = run_with(&mut manager, BrokenStdin, GameConfig::default()).unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Io(_))));
    }

    #[test]
    fn test_finished_game_exits_cleanly() {
        let (_dir, mut manager) = setup();
        let prompter = ScriptedPrompter::new(["Ana", "1", "3", "no"]);
        assert!(run_with(&mut manager, prompter, GameConfig::default()).is_ok());
        assert_eq!(manager.len(), 1);
    }
}
