use std::collections::VecDeque;
use std::io;

/// Trait for interactive user I/O during a game session
///
/// Implemented by the CLI over stdin/stdout; tests use [`ScriptedPrompter`].
pub trait Prompter {
    /// Show `prompt` and read one line.
    ///
    /// Returns `Ok(None)` at end of input and `Err` when reading fails.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    fn display_message(&mut self, message: &str);

    fn display_warning(&mut self, message: &str);
}

/// Prompter that answers from a fixed list of lines and records output
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    /// Prompts shown, in order
    pub prompts: Vec<String>,
    /// Messages shown, in order
    pub messages: Vec<String>,
    /// Warnings shown, in order
    pub warnings: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Answers not yet consumed
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }

    fn display_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }

    fn display_warning(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}
