//! Serializable snapshot of a session for presentation layers.

use super::history::{PlyKind, jump_label};
use super::phases::GameStatus;
use super::scores::Scores;
use super::settings::Settings;
use super::{Board, Player, Position, Session, Theme};
use serde::{Deserialize, Serialize};

/// One row of the jump list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Index to pass to `jump_to`.
    pub index: usize,
    /// Button text, e.g. "Go to move #3".
    pub label: String,
    /// What produced the snapshot.
    pub kind: PlyKind,
    /// True for the live snapshot.
    pub current: bool,
}

/// Everything a presentation layer needs to draw a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    /// The live board.
    pub board: Board,
    /// Player whose turn it is on the live board.
    pub current_player: Player,
    /// Status of the live board.
    pub status: GameStatus,
    /// Tally since the last restart.
    pub scores: Scores,
    /// Seconds left for the current player.
    pub remaining_seconds: u32,
    /// Undos left before the next move.
    pub undos_remaining: u32,
    /// Index of the live snapshot.
    pub pointer: usize,
    /// Jump list, oldest first.
    pub history: Vec<HistoryEntry>,
    /// Active configuration.
    pub settings: Settings,
    /// Current theme.
    pub theme: Theme,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        let history = session
            .history()
            .iter()
            .enumerate()
            .map(|(index, ply)| HistoryEntry {
                index,
                label: jump_label(index),
                kind: ply.kind(),
                current: index == session.pointer(),
            })
            .collect();

        Self {
            board: *session.board(),
            current_player: session.current_player(),
            status: session.status(),
            scores: *session.scores(),
            remaining_seconds: session.remaining_seconds(),
            undos_remaining: session.undos_remaining(),
            pointer: session.pointer(),
            history,
            settings: session.settings().clone(),
            theme: session.theme(),
        }
    }
}

impl SessionView {
    /// Returns a status string for display.
    pub fn status_line(&self) -> String {
        match self.status {
            GameStatus::Won(line) => format!("Winner: {}", line.winner()),
            GameStatus::Draw => "It's a draw!".to_string(),
            GameStatus::TimedOut { forfeited, to_move } => format!(
                "Time's up for {}! Next player: {} (Time: {}s)",
                forfeited, to_move, self.remaining_seconds
            ),
            GameStatus::InProgress { to_move } => {
                format!("Next player: {} (Time: {}s)", to_move, self.remaining_seconds)
            }
        }
    }

    /// Returns true if the live board is finished.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns true if `pos` is part of the winning line.
    pub fn is_winning_square(&self, pos: Position) -> bool {
        self.status
            .winning_line()
            .is_some_and(|line| line.contains(pos))
    }

    /// Formats the score tally.
    pub fn score_line(&self) -> String {
        format!(
            "X: {}  O: {}  Draws: {}",
            self.scores.wins(Player::X),
            self.scores.wins(Player::O),
            self.scores.draws()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_in_progress() {
        let view = Session::default().view();
        assert_eq!(view.status_line(), "Next player: X (Time: 10s)");
    }

    #[test]
    fn test_status_line_winner_and_highlight() {
        let session = [6, 0, 7, 1, 8]
            .into_iter()
            .fold(Session::default(), Session::play_move);
        let view = session.view();
        assert_eq!(view.status_line(), "Winner: X");
        assert!(view.is_over());
        assert!(view.is_winning_square(Position::BottomCenter));
        assert!(!view.is_winning_square(Position::TopLeft));
        assert_eq!(view.score_line(), "X: 1  O: 0  Draws: 0");
    }

    #[test]
    fn test_status_line_timed_out() {
        let view = Session::default().expire_turn().view();
        assert_eq!(view.status_line(), "Time's up for X! Next player: O (Time: 10s)");
    }

    #[test]
    fn test_jump_list_labels() {
        let session = Session::default().play_move(4).play_move(0).jump_to(1);
        let view = session.view();
        let labels: Vec<_> = view.history.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["Go to game start", "Go to move #1", "Go to move #2"]);
        assert!(view.history[1].current);
        assert!(!view.history[2].current);
    }
}
