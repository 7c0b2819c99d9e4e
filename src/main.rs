//! Morpion - terminal tic-tac-toe.

use anyhow::Result;
use clap::Parser;
use morpion::{Cli, Command, ReplayStep, Settings, init_tracing, replay, tui};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load_or_default(&cli.config)?;
    init_tracing(&settings)?;

    match cli.command() {
        Command::Play => tui::run_tui(&settings),
        Command::Replay { tokens } => run_replay(&tokens),
    }
}

/// Parses replay tokens and prints the resulting board.
#[instrument]
fn run_replay(tokens: &[String]) -> Result<()> {
    let steps = tokens
        .iter()
        .map(|token| ReplayStep::parse(token))
        .collect::<Result<Vec<_>, _>>()?;

    info!(steps = steps.len(), "Replaying scripted session");
    println!("{}", replay(&steps).render());
    Ok(())
}
