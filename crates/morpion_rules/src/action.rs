//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events: the player placing a mark and where.

use super::{Player, Position};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move was not applied. The history is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The displayed snapshot already has a winner.
    #[display("Game is already won by {}", _0)]
    GameOver(Player),
}

impl std::error::Error for MoveError {}

/// Error returned by history navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// The requested index is not in the history.
    #[display("History index {} out of range (length {})", index, len)]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Current history length.
        len: usize,
    },
}

impl std::error::Error for HistoryError {}
