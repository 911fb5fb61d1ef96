//! Per-ply countdown keyed by a re-arm generation.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Generation number of an armed timer.
///
/// Every re-arm produces a new epoch. A host captures the epoch when it
/// schedules ticks and hands it back with each tick, so a tick scheduled for
/// a superseded ply can be recognized and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
pub struct TimerEpoch(u64);

impl TimerEpoch {
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Countdown of whole seconds for the current ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnTimer {
    duration: u32,
    remaining: u32,
    epoch: TimerEpoch,
}

impl TurnTimer {
    /// Creates an armed timer with `duration` seconds on the clock.
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            remaining: duration,
            epoch: TimerEpoch(0),
        }
    }

    /// Configured seconds per ply.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Seconds left on the clock.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Generation of the current arming.
    pub fn epoch(&self) -> TimerEpoch {
        self.epoch
    }

    /// True once the countdown has reached zero.
    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Resets the clock to the configured duration under a new epoch.
    pub fn rearm(&mut self) {
        self.remaining = self.duration;
        self.epoch = self.epoch.next();
    }

    /// Changes the duration and re-arms.
    pub fn rearm_with(&mut self, duration: u32) {
        self.duration = duration;
        self.rearm();
    }

    /// Counts down one second, saturating at zero. Returns the seconds left.
    pub fn tick(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    /// Drops the clock to zero without changing the epoch.
    #[cfg(test)]
    pub(crate) fn expire(&mut self) {
        self.remaining = 0;
    }
}
