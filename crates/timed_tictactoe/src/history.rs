//! Plies: the entries of a session's move history.

use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};

/// What produced a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlyKind {
    /// The empty board a game starts from.
    Start,
    /// A player placed a mark.
    Mark {
        /// The player who moved.
        player: Player,
        /// Where the mark went.
        position: Position,
    },
    /// A player ran out of time and lost the turn.
    Forfeit {
        /// The player whose turn was skipped.
        player: Player,
    },
}

/// One snapshot in history together with the event that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ply {
    board: Board,
    kind: PlyKind,
}

impl Ply {
    /// The empty starting snapshot.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            kind: PlyKind::Start,
        }
    }

    /// A snapshot produced by `player` marking `position`.
    pub fn mark(board: Board, player: Player, position: Position) -> Self {
        Self {
            board,
            kind: PlyKind::Mark { player, position },
        }
    }

    /// A snapshot produced by `player` timing out; `board` is unchanged.
    pub fn forfeit(board: Board, player: Player) -> Self {
        Self {
            board,
            kind: PlyKind::Forfeit { player },
        }
    }

    /// The board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The producing event.
    pub fn kind(&self) -> PlyKind {
        self.kind
    }

    /// The player who acted, if any.
    pub fn actor(&self) -> Option<Player> {
        match self.kind {
            PlyKind::Start => None,
            PlyKind::Mark { player, .. } | PlyKind::Forfeit { player } => Some(player),
        }
    }

    /// True if this ply is a timeout forfeit.
    pub fn is_forfeit(&self) -> bool {
        matches!(self.kind, PlyKind::Forfeit { .. })
    }
}

/// Jump-list label for the history entry at `index`.
pub fn jump_label(index: usize) -> String {
    if index == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", index)
    }
}
