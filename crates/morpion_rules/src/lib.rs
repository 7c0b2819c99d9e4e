//! Pure tic-tac-toe game logic with a time-travel move history.
//!
//! # Architecture
//!
//! - **Board**: immutable 3x3 snapshot, copied on every move
//! - **Rules**: win and draw checks over a single snapshot
//! - **History**: snapshots plus a current index, with move and jump operations
//! - **Invariants**: properties every history must satisfy
//!
//! # Example
//!
//! ```
//! use morpion_rules::{GameHistory, GameStatus, Player, Position};
//!
//! let mut history = GameHistory::new();
//! for pos in [0, 4, 1, 7, 2] {
//!     let pos = Position::from_index(pos).unwrap();
//!     history.play(pos).unwrap();
//! }
//! assert_eq!(history.status(), GameStatus::Won(Player::X));
//!
//! history.jump_to(2).unwrap();
//! history.play(Position::BottomRight).unwrap();
//! assert_eq!(history.len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{HistoryError, Move, MoveError};
pub use history::GameHistory;
pub use position::Position;
pub use rules::{check_winner, is_draw, is_full, winning_line};
pub use types::{Board, GameStatus, Player, Square};
