//! Timed tic-tac-toe - session logic with turn clocks, history, and undo
//!
//! A [`Session`] owns one game and its surroundings: the move history with
//! its jump pointer, the running score, a per-turn countdown, an undo budget,
//! and the configured settings. Hosts feed it commands and once-per-second
//! ticks; everything else is queries.
//!
//! # Example
//!
//! ```
//! use timed_tictactoe::{GameStatus, Player, Session, Settings};
//!
//! let session = Session::new(Settings::default())
//!     .play_move(0)
//!     .play_move(4)
//!     .play_move(1)
//!     .play_move(8)
//!     .play_move(2);
//!
//! match session.status() {
//!     GameStatus::Won(line) => {
//!         assert_eq!(line.winner(), Player::X);
//!         assert_eq!(line.indices(), [0, 1, 2]);
//!     }
//!     other => panic!("unexpected status {:?}", other),
//! }
//! assert_eq!(session.scores().wins(Player::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod contracts;
mod error;
mod history;
mod invariants;
mod phases;
mod position;
mod scores;
mod session;
mod settings;
mod theme;
mod timer;
mod types;
mod view;

pub mod rules;

// Crate-level exports - Board types
pub use position::Position;
pub use types::{Board, Player, Square};

// Crate-level exports - Rules
pub use rules::{WinningLine, evaluate};

// Crate-level exports - Session
pub use history::{Ply, PlyKind, jump_label};
pub use phases::{GameStatus, Outcome};
pub use scores::Scores;
pub use session::{Session, TickOutcome};
pub use timer::{TimerEpoch, TurnTimer};
pub use view::{HistoryEntry, SessionView};

// Crate-level exports - Configuration
pub use settings::Settings;
pub use theme::Theme;

// Crate-level exports - Errors
pub use error::{CommandError, ConfigError};

// Crate-level exports - Contracts and invariants
pub use contracts::{Contract, PlayContract};
pub use invariants::{
    AlternatingTurnInvariant, BoundedCountersInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicHistoryInvariant, SessionInvariants,
};
