//! Session settings for timed play.

use super::error::{CommandError, ConfigError};
use super::{Player, Theme};
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a session.
///
/// Missing keys in a settings file fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct Settings {
    /// Seconds each player has to move.
    turn_duration: u32,

    /// Who moves first after a restart.
    starting_player: Player,

    /// Undos permitted between two moves.
    undo_budget: u32,

    /// Initial color theme.
    theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            turn_duration: Self::DEFAULT_TURN_DURATION,
            starting_player: Player::X,
            undo_budget: Self::DEFAULT_UNDO_BUDGET,
            theme: Theme::Light,
        }
    }
}

impl Settings {
    /// Default seconds per turn.
    pub const DEFAULT_TURN_DURATION: u32 = 10;

    /// Default number of undos between moves.
    pub const DEFAULT_UNDO_BUDGET: u32 = 3;

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;
        let settings = Self::from_toml_str(&content)?;
        info!(
            turn_duration = settings.turn_duration,
            starting_player = %settings.starting_player,
            undo_budget = settings.undo_budget,
            "Settings loaded"
        );
        Ok(settings)
    }

    /// Parses settings from TOML text and validates them.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks that the turn duration is at least one second.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.turn_duration == 0 {
            return Err(ConfigError::new("turn_duration must be at least 1 second"));
        }
        Ok(())
    }

    /// Parses a turn duration typed by a user.
    ///
    /// Accepts positive whole seconds only.
    pub fn parse_duration(input: &str) -> Result<u32, CommandError> {
        match input.trim().parse::<u32>() {
            Ok(secs) if secs > 0 => Ok(secs),
            _ => Err(CommandError::InvalidDuration(input.to_string())),
        }
    }
}
