//! First-class invariants for a timed session.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are testable independently and checked as postconditions in debug
//! builds.

mod alternating_turn;
mod bounded_counters;
mod monotonic_history;

pub use alternating_turn::AlternatingTurnInvariant;
pub use bounded_counters::BoundedCountersInvariant;
pub use monotonic_history::MonotonicHistoryInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
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
/// Implemented for three-element tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
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

/// All session invariants as a composable set.
pub type SessionInvariants = (
    MonotonicHistoryInvariant,
    AlternatingTurnInvariant,
    BoundedCountersInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Session, Settings, Square};

    #[test]
    fn test_invariant_set_holds_for_new_session() {
        let session = Session::new(Settings::default());
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_forfeit() {
        let session = Session::new(Settings::default())
            .play_move(0)
            .play_move(4)
            .expire_turn()
            .play_move(8);
        assert_eq!(session.history().len(), 5);
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut session = Session::new(Settings::default()).play_move(4);
        // Overwrite the last snapshot with a different mark and move the
        // pointer past the end.
        let mut board = *session.board();
        board.set(crate::Position::TopLeft, Square::Occupied(Player::O));
        session.history[1] = crate::Ply::mark(board, Player::O, crate::Position::Center);
        session.pointer = 5;

        let violations = SessionInvariants::check_all(&session).unwrap_err();
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let session = Session::new(Settings::default()).play_move(2);
        type TwoInvariants = (MonotonicHistoryInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&session).is_ok());
    }
}
