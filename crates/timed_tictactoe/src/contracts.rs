//! Contract-based validation for session commands.
//!
//! Contracts pair preconditions (checked on every call) with postconditions
//! (checked in debug builds): {P} command {Q}.

use super::error::CommandError;
use super::invariants::{InvariantSet, SessionInvariants};
use super::{Position, Session};
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), CommandError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), CommandError>;
}

/// Verifies the full invariant set, folding violations into one error.
#[instrument(skip(session))]
pub fn check_invariants(session: &Session) -> Result<(), CommandError> {
    SessionInvariants::check_all(session).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Postcondition failed");
        CommandError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
    })
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The live board has neither a winner nor a full grid.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects commands against a finished board.
    pub fn check(session: &Session) -> Result<(), CommandError> {
        if session.status().is_over() {
            Err(CommandError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The current player's clock has not run out.
pub struct ClockRunning;

impl ClockRunning {
    /// Rejects moves after the countdown reached zero.
    pub fn check(session: &Session) -> Result<(), CommandError> {
        if session.timer().is_expired() {
            Err(CommandError::TimerExpired(session.current_player()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The target square is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto an occupied square.
    pub fn check(pos: Position, session: &Session) -> Result<(), CommandError> {
        if session.board().is_empty(pos) {
            Ok(())
        } else {
            Err(CommandError::SquareOccupied(pos))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Command Contracts
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Preconditions:
/// - Game is not over
/// - Clock is running
/// - Square is empty
pub struct PlayContract;

impl Contract<Session, Position> for PlayContract {
    #[instrument(skip(session))]
    fn pre(session: &Session, pos: &Position) -> Result<(), CommandError> {
        GameNotOver::check(session)?;
        ClockRunning::check(session)?;
        SquareIsEmpty::check(*pos, session)
    }

    fn post(_before: &Session, after: &Session) -> Result<(), CommandError> {
        check_invariants(after)
    }
}

/// Contract for a timeout forfeit. Only requires an unfinished game.
pub struct ForfeitContract;

impl Contract<Session, ()> for ForfeitContract {
    fn pre(session: &Session, _: &()) -> Result<(), CommandError> {
        GameNotOver::check(session)
    }

    fn post(_before: &Session, after: &Session) -> Result<(), CommandError> {
        check_invariants(after)
    }
}

/// Contract for stepping back one ply.
///
/// Preconditions:
/// - Pointer is past the start
/// - Undo budget is not exhausted
pub struct UndoContract;

impl Contract<Session, ()> for UndoContract {
    fn pre(session: &Session, _: &()) -> Result<(), CommandError> {
        if session.pointer() == 0 {
            return Err(CommandError::NothingToUndo);
        }
        if session.undos_remaining() == 0 {
            return Err(CommandError::UndoBudgetExhausted);
        }
        Ok(())
    }

    fn post(_before: &Session, after: &Session) -> Result<(), CommandError> {
        check_invariants(after)
    }
}

/// Contract for jumping to a history entry.
pub struct JumpContract;

impl Contract<Session, usize> for JumpContract {
    fn pre(session: &Session, index: &usize) -> Result<(), CommandError> {
        let last = session.history().len() - 1;
        if *index > last {
            Err(CommandError::MoveOutOfRange {
                index: *index,
                last,
            })
        } else {
            Ok(())
        }
    }

    fn post(_before: &Session, after: &Session) -> Result<(), CommandError> {
        check_invariants(after)
    }
}
