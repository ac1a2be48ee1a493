//! Interactive game session.
//!
//! Drives one or more rounds against a [`ScoreManager`] through a
//! [`Prompter`]:
//!
//! - Ask for the player's name, the number of dice and a guess
//! - Roll, score the guess and record the round
//! - Show the leaderboard and offer another round
//!
//! All input validation happens here by re-prompting; the manager only ever
//! sees in-range values.

mod leaderboard;
mod prompter;

pub use leaderboard::{MISSING_FIELD, format_leaderboard};
pub use prompter::{Prompter, ScriptedPrompter};

use strum::{Display, EnumString};
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::dice::{DiceRoll, max_total};
use crate::error::{Error, Result};
use crate::manager::ScoreManager;

/// Answer to the "play again?" question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum RestartAnswer {
    Yes,
    No,
}

/// Summary of a finished round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub name: String,
    pub dice_count: u32,
    pub guess: i64,
    pub roll: DiceRoll,
    pub score: u32,
    pub max_score: u32,
}

pub struct TerminalSession<'a, P: Prompter> {
    manager: &'a mut ScoreManager,
    prompter: P,
    config: GameConfig,
}

impl<'a, P: Prompter> TerminalSession<'a, P> {
    pub fn new(manager: &'a mut ScoreManager, prompter: P, config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            manager,
            prompter,
            config,
        })
    }

    /// Give back the prompter, e.g. to inspect a scripted transcript
    pub fn into_prompter(self) -> P {
        self.prompter
    }

    /// Play rounds until the player declines another one.
    ///
    /// Returns the number of rounds played. Running out of input ends the
    /// session with `Error::InputClosed`.
    pub fn run(&mut self) -> Result<usize> {
        self.prompter
            .display_message("Welcome to the dice guessing game!");

        let mut rounds = 0;
        loop {
            self.play_round()?;
            rounds += 1;

            if self.prompt_restart()? == RestartAnswer::No {
                break;
            }
        }

        info!("Session finished after {} rounds", rounds);
        self.prompter.display_message("Thanks for playing!");
        Ok(rounds)
    }

    /// Play a single round and record its score.
    pub fn play_round(&mut self) -> Result<RoundOutcome> {
        let line = self.read_answer("Enter your name: ")?;
        let name = line.trim();

        let sides = self.config.sides;
        let dice_count = self.prompt_int_in_range(
            &format!("How many dice? (1-{}): ", self.config.max_dice),
            1,
            i64::from(self.config.max_dice),
        )? as u32; // within 1..=max_dice

        let max = max_total(dice_count, sides);
        let guess = self.prompt_int_in_range(
            &format!("Guess the total ({}-{}): ", dice_count, max),
            i64::from(dice_count),
            i64::try_from(max).unwrap_or(i64::MAX),
        )?;

        let roll = self.manager.roll_dice(dice_count, sides)?;
        let max_score = u32::try_from(max).unwrap_or(u32::MAX);
        let score = self.manager.score_guess(roll.total, guess, max_score);

        self.prompter.display_message(&format!(
            "Rolls: {}  Total: {}",
            join_rolls(&roll.rolls),
            roll.total
        ));
        self.prompter.display_message(&format!(
            "Your guess: {}  Score: {}/{}",
            guess, score, max_score
        ));

        self.manager.add_score(name, score, dice_count, guess)?;
        // Name as stored, after the default-name rule
        let name = self
            .manager
            .scores()
            .last()
            .map_or_else(|| name.to_string(), |e| e.name.clone());

        self.prompter.display_message("High scores:");
        self.prompter.display_message(&format_leaderboard(
            &self.manager.high_scores(),
            self.config.leaderboard_size,
        ));

        debug!(
            "Round finished: name={}, dice={}, guess={}, total={}, score={}",
            name, dice_count, guess, roll.total, score
        );

        Ok(RoundOutcome {
            name,
            dice_count,
            guess,
            roll,
            score,
            max_score,
        })
    }

    /// Ask for an integer in `[min, max]`, re-prompting until one is given.
    pub fn prompt_int_in_range(&mut self, prompt: &str, min: i64, max: i64) -> Result<i64> {
        loop {
            let line = self.read_answer(prompt)?;
            match line.trim().parse::<i64>() {
                Ok(n) if (min..=max).contains(&n) => return Ok(n),
                Ok(n) => self.prompter.display_warning(&format!(
                    "{} is out of range, enter a number between {} and {}",
                    n, min, max
                )),
                Err(_) => self
                    .prompter
                    .display_warning("Invalid number, please try again"),
            }
        }
    }

    /// Read one line; end of input becomes `Error::InputClosed`, read failures `Error::Io`.
    fn read_answer(&mut self, prompt: &str) -> Result<String> {
        self.prompter.read_line(prompt)?.ok_or(Error::InputClosed)
    }

    /// Ask whether to play again. Only `yes` or `no` is accepted.
    pub fn prompt_restart(&mut self) -> Result<RestartAnswer> {
        loop {
            let line = self.read_answer("Play again? (yes/no): ")?;
            match line.trim().parse::<RestartAnswer>() {
                Ok(answer) => return Ok(answer),
                Err(_) => self.prompter.display_warning("Please answer 'yes' or 'no'"),
            }
        }
    }
}

fn join_rolls(rolls: &[u32]) -> String {
    rolls
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
