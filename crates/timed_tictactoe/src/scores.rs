//! Running tally of finished games.

use super::phases::Outcome;
use super::Player;
use serde::{Deserialize, Serialize};

/// Wins per player and draws since the last restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scores {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Scores {
    /// Wins credited to `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Draws recorded.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Folds an outcome into the tally.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Player::X) => self.x_wins += 1,
            Outcome::Winner(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_outcomes() {
        let mut scores = Scores::default();
        scores.record(Outcome::Winner(Player::X));
        scores.record(Outcome::Winner(Player::X));
        scores.record(Outcome::Winner(Player::O));
        scores.record(Outcome::Draw);
        assert_eq!(scores.wins(Player::X), 2);
        assert_eq!(scores.wins(Player::O), 1);
        assert_eq!(scores.draws(), 1);
    }
}
