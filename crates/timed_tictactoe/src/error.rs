//! Error types for session commands and configuration.

use super::{Player, Position};
use derive_more::{Display, Error};
use tracing::instrument;

/// Reason a session command was rejected.
///
/// The consuming command methods on [`crate::Session`] swallow these and keep
/// the previous state; the `try_*` methods surface them.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// The cell index is outside 0-8.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The live board already has a winner or is full.
    #[display("Game is already over")]
    GameOver,

    /// The turn timer ran out before the move arrived.
    #[display("Time is up for {}", _0)]
    TimerExpired(#[error(not(source))] Player),

    /// The pointer is already at the start of history.
    #[display("Nothing to undo")]
    NothingToUndo,

    /// No undos remain in the budget.
    #[display("Undo budget exhausted")]
    UndoBudgetExhausted,

    /// A jump target past the end of history.
    #[display("Move {} is out of range (last move is {})", index, last)]
    MoveOutOfRange {
        /// Requested move index.
        index: usize,
        /// Last valid move index.
        last: usize,
    },

    /// A turn duration that is zero or not a number.
    #[display("Invalid turn duration: {:?}", _0)]
    InvalidDuration(#[error(not(source))] String),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_error_messages() {
        assert_eq!(
            CommandError::SquareOccupied(Position::Center).to_string(),
            "Square Center is already occupied"
        );
        assert_eq!(
            CommandError::MoveOutOfRange { index: 7, last: 2 }.to_string(),
            "Move 7 is out of range (last move is 2)"
        );
        assert_eq!(
            CommandError::InvalidDuration("abc".to_string()).to_string(),
            "Invalid turn duration: \"abc\""
        );
    }

    #[test]
    fn test_config_error_tracks_caller() {
        let err = ConfigError::new("bad");
        assert_eq!(err.file, file!());
        assert!(err.to_string().starts_with("Config error: bad at "));
    }
}
