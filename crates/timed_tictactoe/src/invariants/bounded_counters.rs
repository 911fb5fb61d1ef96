//! Bounded counters invariant: pointer, clock, and undo budget stay in range.

use super::super::Session;
use super::Invariant;

/// Invariant: Every counter on the session is within its bounds.
///
/// - the pointer addresses an existing history entry
/// - the clock never exceeds its duration, and the duration is positive
/// - the undo budget never exceeds the configured amount
pub struct BoundedCountersInvariant;

impl Invariant<Session> for BoundedCountersInvariant {
    fn holds(session: &Session) -> bool {
        let timer = session.timer();
        session.pointer() < session.history().len()
            && timer.duration() >= 1
            && timer.remaining() <= timer.duration()
            && session.undos_remaining() <= *session.settings().undo_budget()
    }

    fn description() -> &'static str {
        "Pointer, timer, and undo budget are within bounds"
    }
}
