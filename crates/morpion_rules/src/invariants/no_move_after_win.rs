//! No snapshot may follow a won board.

use super::Invariant;
use crate::GameHistory;
use crate::rules::check_winner;

/// Invariant: only the last snapshot of a history may hold a winner.
pub struct NoMoveAfterWinInvariant;

impl Invariant<GameHistory> for NoMoveAfterWinInvariant {
    fn holds(history: &GameHistory) -> bool {
        let snapshots = history.snapshots();
        snapshots
            .iter()
            .take(snapshots.len().saturating_sub(1))
            .all(|board| check_winner(board).is_none())
    }

    fn description() -> &'static str {
        "No move is played after a win"
    }
}
