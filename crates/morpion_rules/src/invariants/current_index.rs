//! Current index invariant: the pointer always selects a snapshot.

use super::Invariant;
use crate::GameHistory;

/// Invariant: the history is non-empty and the current index is in range.
pub struct CurrentIndexInvariant;

impl Invariant<GameHistory> for CurrentIndexInvariant {
    fn holds(history: &GameHistory) -> bool {
        !history.is_empty() && history.current_index() < history.len()
    }

    fn description() -> &'static str {
        "Current index points at an existing snapshot"
    }
}
