//! CLI implementation of Prompter for the interactive game

use std::io::{self, BufRead, Write};

use dicegame::Prompter;
use owo_colors::OwoColorize;

/// Prompter over stdin/stdout
pub struct CliPrompter;

impl Prompter for CliPrompter {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{}", prompt);
        io::stdout().flush()?;
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }

    fn display_message(&mut self, message: &str) {
        println!("{}", message);
    }

    fn display_warning(&mut self, message: &str) {
        eprintln!("{}", message.yellow());
    }
}
