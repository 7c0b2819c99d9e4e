//! Morpion: terminal tic-tac-toe with move-history time travel.
//!
//! # Architecture
//!
//! - **Rules**: pure game logic lives in [`morpion_rules`]
//! - **TUI**: ratatui front end driving a single [`GameHistory`]
//! - **Replay**: headless scripted sessions
//! - **Config**: optional TOML settings
//!
//! # Example
//!
//! ```
//! use morpion::{ReplayStep, replay};
//!
//! let steps: Vec<ReplayStep> = ["0", "4", "1", "7", "2"]
//!     .iter()
//!     .map(|t| ReplayStep::parse(t).unwrap())
//!     .collect();
//! let report = replay(&steps);
//! assert!(report.render().contains("Gagnant : X"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod logging;
mod replay;
pub mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, Settings};

// Crate-level exports - Logging
pub use logging::init_tracing;

// Crate-level exports - Replay
pub use replay::{ReplayReport, ReplayStep, ReplayTokenError, replay};

// Crate-level exports - Game types
pub use morpion_rules::{
    Board, GameHistory, GameStatus, HistoryError, Move, MoveError, Player, Position, Square,
};
