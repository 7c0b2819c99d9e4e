//! Alternating turn invariant: marks are added X, O, X, O, ...

use super::Invariant;
use crate::{GameHistory, Player};

/// Invariant: the mark added to reach snapshot `i + 1` belongs to X when `i`
/// is even and to O when `i` is odd.
pub struct AlternatingTurnInvariant;

impl Invariant<GameHistory> for AlternatingTurnInvariant {
    fn holds(history: &GameHistory) -> bool {
        (1..history.len()).all(|index| {
            history
                .move_at(index)
                .is_some_and(|mv| mv.player == Player::for_index(index - 1))
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
