//! Monotonic history invariant: each snapshot extends its predecessor.

use super::super::{Board, PlyKind, Session, Square};
use super::Invariant;

/// Invariant: History starts from an empty board and grows one step per ply.
///
/// A mark fills exactly one previously empty square and leaves the rest
/// untouched. A forfeit leaves the board unchanged. A start entry only
/// appears at index 0.
pub struct MonotonicHistoryInvariant;

impl Invariant<Session> for MonotonicHistoryInvariant {
    fn holds(session: &Session) -> bool {
        let history = session.history();

        match history.first() {
            Some(first) if first.kind() == PlyKind::Start && *first.board() == Board::new() => {}
            _ => return false,
        }

        history.windows(2).all(|pair| {
            let (prev, next) = (pair[0].board(), pair[1].board());
            match pair[1].kind() {
                PlyKind::Start => false,
                PlyKind::Forfeit { .. } => prev == next,
                PlyKind::Mark { player, position } => {
                    if !prev.is_empty(position) {
                        return false;
                    }
                    let mut expected = *prev;
                    expected.set(position, Square::Occupied(player));
                    expected == *next
                }
            }
        })
    }

    fn description() -> &'static str {
        "History snapshots extend their predecessor by at most one mark"
    }
}
