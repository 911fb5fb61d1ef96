//! Game status and outcomes derived from the live snapshot.

use super::rules::WinningLine;
use super::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Status of the live snapshot.
///
/// `Won` and `Draw` are terminal for moves. `TimedOut` is an in-progress
/// game whose last ply was a forfeit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress {
        /// Player to move.
        to_move: Player,
    },
    /// Game is ongoing; the previous player ran out of time.
    TimedOut {
        /// Player who lost the turn.
        forfeited: Player,
        /// Player to move.
        to_move: Player,
    },
    /// Game ended in a win.
    Won(WinningLine),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Won(_) | GameStatus::Draw)
    }

    /// The finished outcome, if any.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameStatus::Won(line) => Some(Outcome::Winner(line.winner())),
            GameStatus::Draw => Some(Outcome::Draw),
            GameStatus::InProgress { .. } | GameStatus::TimedOut { .. } => None,
        }
    }

    /// The winning line, if the game is won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            GameStatus::Won(line) => Some(*line),
            _ => None,
        }
    }
}
