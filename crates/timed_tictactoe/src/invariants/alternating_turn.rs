//! Alternating turn invariant: every ply belongs to the player whose turn it was.

use super::super::Session;
use super::Invariant;

/// Invariant: Players alternate, starting with the game's opening player.
///
/// Forfeits count as turns, so the ply at index `i` is always made by the
/// player to move at index `i - 1`.
pub struct AlternatingTurnInvariant;

impl Invariant<Session> for AlternatingTurnInvariant {
    fn holds(session: &Session) -> bool {
        session
            .history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(i, ply)| ply.actor() == Some(session.player_at(i - 1)))
    }

    fn description() -> &'static str {
        "Players alternate turns starting with the opening player"
    }
}
