//! Command-line interface for morpion.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;

/// Morpion - tic-tac-toe with move-history time travel
#[derive(Parser, Debug)]
#[command(name = "morpion")]
#[command(about = "Terminal tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML settings file (optional; defaults apply if missing)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH, global = true)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply scripted moves and jumps, then print the final board
    Replay {
        /// Cells (0-8 or labels like `center`) and jumps (`@index`)
        #[arg(required = true, num_args = 1..)]
        tokens: Vec<String>,
    },
}

impl Cli {
    /// The command to run, `play` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}
