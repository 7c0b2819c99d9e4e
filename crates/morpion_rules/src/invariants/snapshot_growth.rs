//! Snapshot growth invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::{Board, GameHistory, Square};

/// Invariant: snapshot 0 is empty and every later snapshot equals the
/// previous one plus exactly one newly occupied square.
pub struct SnapshotGrowthInvariant;

impl Invariant<GameHistory> for SnapshotGrowthInvariant {
    fn holds(history: &GameHistory) -> bool {
        let snapshots = history.snapshots();

        if snapshots.first() != Some(&Board::new()) {
            return false;
        }

        snapshots.windows(2).all(|pair| {
            let (before, after) = (pair[0].squares(), pair[1].squares());
            let mut added = 0;
            for (b, a) in before.iter().zip(after.iter()) {
                match (b, a) {
                    (b, a) if b == a => {}
                    (Square::Empty, Square::Occupied(_)) => added += 1,
                    _ => return false,
                }
            }
            added == 1
        })
    }

    fn description() -> &'static str {
        "Each snapshot extends the previous one by exactly one mark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_new_history_holds() {
        assert!(SnapshotGrowthInvariant::holds(&GameHistory::new()));
    }

    #[test]
    fn test_played_history_holds() {
        let mut history = GameHistory::new();
        history.play(Position::Center).expect("legal move");
        history.play(Position::TopLeft).expect("legal move");
        assert!(SnapshotGrowthInvariant::holds(&history));
        assert_eq!(history.current_board().occupied(), 2);
    }

    #[test]
    fn test_skipped_snapshot_violates() {
        let one = Board::new().with_mark(Position::Center, Player::X);
        let three = one
            .with_mark(Position::TopLeft, Player::O)
            .with_mark(Position::TopRight, Player::X);
        let history = GameHistory::from_parts(vec![Board::new(), one, three], 2);
        assert!(!SnapshotGrowthInvariant::holds(&history));
    }

    #[test]
    fn test_overwritten_mark_violates() {
        let one = Board::new().with_mark(Position::Center, Player::X);
        let two = one.with_mark(Position::Center, Player::O);
        let history = GameHistory::from_parts(vec![Board::new(), one, two], 2);
        assert!(!SnapshotGrowthInvariant::holds(&history));
    }
}
