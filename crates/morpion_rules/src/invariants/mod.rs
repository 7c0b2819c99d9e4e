//! First-class invariants for the move history.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are testable independently and checked in debug builds.

use crate::GameHistory;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        check_one::<S, I4>(state, &mut violations);
        into_result(violations)
    }
}

pub mod alternating_turn;
pub mod current_index;
pub mod no_move_after_win;
pub mod snapshot_growth;

pub use alternating_turn::AlternatingTurnInvariant;
pub use current_index::CurrentIndexInvariant;
pub use no_move_after_win::NoMoveAfterWinInvariant;
pub use snapshot_growth::SnapshotGrowthInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    SnapshotGrowthInvariant,
    AlternatingTurnInvariant,
    CurrentIndexInvariant,
    NoMoveAfterWinInvariant,
);

/// Checks every history invariant.
pub fn check_history(history: &GameHistory) -> Result<(), Vec<InvariantViolation>> {
    HistoryInvariants::check_all(history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_invariant_set_holds_for_new_history() {
        assert!(check_history(&GameHistory::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jumps() {
        let mut history = GameHistory::new();
        for pos in [Position::TopLeft, Position::Center, Position::TopRight] {
            history.play(pos).expect("legal move");
        }
        history.jump_to(1).expect("in range");
        assert!(check_history(&history).is_ok());

        history.play(Position::BottomRight).expect("legal move");
        assert!(check_history(&history).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (SnapshotGrowthInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&GameHistory::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        use crate::{Board, Player};
        let one = Board::new().with_mark(Position::TopLeft, Player::O);
        let history = GameHistory::from_parts(vec![Board::new(), one], 3);

        let violations = check_history(&history).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations[0].description,
            AlternatingTurnInvariant::description()
        );
        assert_eq!(violations[1].description, CurrentIndexInvariant::description());
    }
}
