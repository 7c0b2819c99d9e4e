//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a single board snapshot. Rules are kept apart
//! from the history store so they can be checked on any snapshot.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};
