mod cli;
mod commands;
mod prompter;

use anyhow::Result;
use clap::Parser;
use dicegame::{GameConfig, ScoreManager, ScoreManagerConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};

fn main() -> Result<()> {
    // Logs go to stderr so they don't interleave with prompts
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("dicegame=warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut builder = ScoreManagerConfig::builder().scores_path(&args.scores);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    let mut manager = ScoreManager::load(builder.build());
    info!("Using score file {:?}", manager.path());

    match args.command {
        Some(Command::Scores { top }) => {
            commands::scores::run(&manager, top);
            Ok(())
        }
        Some(Command::Play { sides, max_dice }) => {
            let config = GameConfig {
                sides,
                max_dice,
                ..GameConfig::default()
            };
            commands::play::run(&mut manager, config)
        }
        None => commands::play::run(&mut manager, GameConfig::default()),
    }
}
