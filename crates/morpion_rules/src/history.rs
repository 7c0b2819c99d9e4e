//! Time-travel move history.
//!
//! A [`GameHistory`] is the only mutable state of a game: an ordered list of
//! board snapshots plus a pointer to the one being displayed. Whose turn it
//! is comes from the pointer's parity and is never stored.

use super::action::{HistoryError, Move, MoveError};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::{check_winner, is_full};
use super::{Board, GameStatus, Player, Position, Square};
use tracing::{debug, instrument};

/// Ordered board snapshots with a current index.
///
/// Index 0 is always the empty board, and the current index always points at
/// an existing snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    snapshots: Vec<Board>,
    current: usize,
}

impl GameHistory {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current: 0,
        }
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Number of snapshots (moves played on this branch plus one).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: a history holds at least the empty board.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the displayed snapshot.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The displayed snapshot.
    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.current]
    }

    /// Player to move on the displayed snapshot.
    pub fn to_move(&self) -> Player {
        Player::for_index(self.current)
    }

    /// Winner on the displayed snapshot, if any.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self.current_board())
    }

    /// Status of the displayed snapshot.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        match check_winner(board) {
            Some(player) => GameStatus::Won(player),
            None if is_full(board) => GameStatus::Draw,
            None => GameStatus::InProgress {
                next: self.to_move(),
            },
        }
    }

    /// Places the current player's mark at `position`.
    ///
    /// On success the new snapshot is appended right after the current one,
    /// every snapshot past the current index is discarded, and the current
    /// index moves to the new snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the displayed snapshot already has a
    /// winner and [`MoveError::SquareOccupied`] if the square is taken. The
    /// history is left untouched in both cases.
    #[instrument(skip(self), fields(current = self.current, len = self.snapshots.len()))]
    pub fn play(&mut self, position: Position) -> Result<Move, MoveError> {
        let board = *self.current_board();

        if let Some(winner) = check_winner(&board) {
            debug!(%winner, "Move ignored, game already won");
            return Err(MoveError::GameOver(winner));
        }
        if !board.is_empty(position) {
            debug!(%position, "Move ignored, square occupied");
            return Err(MoveError::SquareOccupied(position));
        }

        let player = self.to_move();
        let next = board.with_mark(position, player);

        let dropped = self.snapshots.len() - (self.current + 1);
        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(next);
        self.current = self.snapshots.len() - 1;

        debug!(%player, %position, dropped, current = self.current, "Move applied");
        debug_assert!(
            HistoryInvariants::check_all(self).is_ok(),
            "history invariants violated after move"
        );

        Ok(Move::new(player, position))
    }

    /// Makes the snapshot at `index` the displayed one.
    ///
    /// The snapshot list itself is not modified; a later [`play`](Self::play)
    /// discards everything after `index`.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] if `index` is not a snapshot index.
    #[instrument(skip(self), fields(current = self.current, len = self.snapshots.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        if index >= self.snapshots.len() {
            return Err(HistoryError::OutOfRange {
                index,
                len: self.snapshots.len(),
            });
        }
        self.current = index;
        debug!(current = self.current, "Jumped in history");
        Ok(())
    }

    /// Steps one snapshot back. Returns false at the start.
    pub fn step_back(&mut self) -> bool {
        match self.current.checked_sub(1) {
            Some(index) => self.jump_to(index).is_ok(),
            None => false,
        }
    }

    /// Steps one snapshot forward. Returns false at the end.
    pub fn step_forward(&mut self) -> bool {
        self.jump_to(self.current + 1).is_ok()
    }

    /// The move that produced each snapshot after the first.
    ///
    /// Entry `i` is the move leading from snapshot `i` to snapshot `i + 1`.
    pub fn moves(&self) -> Vec<Move> {
        self.snapshots
            .windows(2)
            .filter_map(|pair| added_move(&pair[0], &pair[1]))
            .collect()
    }

    /// The move that produced snapshot `index`, if `index` is past the start.
    pub fn move_at(&self, index: usize) -> Option<Move> {
        let before = self.snapshots.get(index.checked_sub(1)?)?;
        let after = self.snapshots.get(index)?;
        added_move(before, after)
    }
}

#[cfg(test)]
impl GameHistory {
    /// Builds a history from raw parts, bypassing every check.
    pub(crate) fn from_parts(snapshots: Vec<Board>, current: usize) -> Self {
        Self { snapshots, current }
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// The single square that became occupied between two snapshots.
fn added_move(before: &Board, after: &Board) -> Option<Move> {
    Position::ALL.into_iter().find_map(|pos| {
        match (before.get(pos), after.get(pos)) {
            (Square::Empty, Square::Occupied(player)) => Some(Move::new(player, pos)),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played(positions: &[Position]) -> GameHistory {
        let mut history = GameHistory::new();
        for pos in positions {
            history.play(*pos).expect("legal move");
        }
        history
    }

    #[test]
    fn test_new_history_has_empty_board() {
        let history = GameHistory::new();
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
        assert_eq!(history.current_index(), 0);
        assert_eq!(history.current_board(), &Board::new());
        assert_eq!(history.to_move(), Player::X);
    }

    #[test]
    fn test_play_appends_and_advances() {
        let history = played(&[Position::Center, Position::TopLeft]);
        assert_eq!(history.len(), 3);
        assert_eq!(history.current_index(), 2);
        assert_eq!(history.to_move(), Player::X);
        assert_eq!(
            history.current_board().get(Position::TopLeft),
            Square::Occupied(Player::O)
        );
    }

    #[test]
    fn test_occupied_square_is_ignored() {
        let mut history = played(&[Position::Center]);
        let before = history.clone();

        assert_eq!(
            history.play(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(history, before);
    }

    #[test]
    fn test_jump_keeps_snapshots_until_next_move() {
        let mut history = played(&[Position::Center, Position::TopLeft, Position::BottomRight]);

        history.jump_to(1).expect("in range");
        assert_eq!(history.len(), 4);
        assert_eq!(history.current_index(), 1);
        assert_eq!(history.to_move(), Player::O);

        history.play(Position::TopRight).expect("legal move");
        assert_eq!(history.len(), 3);
        assert_eq!(history.current_index(), 2);
        assert_eq!(
            history.moves(),
            vec![
                Move::new(Player::X, Position::Center),
                Move::new(Player::O, Position::TopRight),
            ]
        );
    }

    #[test]
    fn test_jump_out_of_range_changes_nothing() {
        let mut history = played(&[Position::Center]);
        assert_eq!(
            history.jump_to(2),
            Err(HistoryError::OutOfRange { index: 2, len: 2 })
        );
        assert_eq!(history.current_index(), 1);
    }

    #[test]
    fn test_step_back_and_forward_stop_at_ends() {
        let mut history = played(&[Position::Center]);
        assert!(!history.step_forward());
        assert!(history.step_back());
        assert_eq!(history.current_index(), 0);
        assert!(!history.step_back());
        assert!(history.step_forward());
        assert_eq!(history.current_index(), 1);
    }

    #[test]
    fn test_move_at() {
        let history = played(&[Position::Center, Position::TopLeft]);
        assert_eq!(history.move_at(0), None);
        assert_eq!(history.move_at(2), Some(Move::new(Player::O, Position::TopLeft)));
        assert_eq!(history.move_at(3), None);
    }

    #[test]
    fn test_status_reports_draw() {
        // X O X / X O O / O X X
        let history = played(&[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::Center,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
            Position::BottomRight,
        ]);
        assert_eq!(history.status(), GameStatus::Draw);
    }

    #[test]
    fn test_rejected_operations_keep_history_well_formed() {
        let mut history = GameHistory::new();
        assert!(history.jump_to(1).is_err());
        assert!(history.jump_to(usize::MAX).is_err());
        assert!(!history.step_back());

        history.play(Position::Center).expect("legal move");
        assert!(history.play(Position::Center).is_err());
        assert!(history.jump_to(5).is_err());

        assert!(!history.is_empty());
        assert!(history.current_index() < history.len());
        assert_eq!(history.current_board().occupied(), 1);
        assert_eq!(history.status(), GameStatus::InProgress { next: Player::O });
        assert!(crate::invariants::check_history(&history).is_ok());
    }
}
