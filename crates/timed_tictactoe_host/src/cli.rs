//! Command-line interface for the timed tic-tac-toe host.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use timed_tictactoe::{ConfigError, Player, Settings};
use tracing::{debug, instrument};

/// Timed Tic-Tac-Toe - play from the terminal with a per-turn clock
#[derive(Parser, Debug)]
#[command(name = "timed_tictactoe")]
#[command(about = "Tic-tac-toe with turn timers, history, and undo", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seconds per turn (overrides the settings file)
    #[arg(short, long)]
    pub duration: Option<u32>,

    /// Player who moves first (overrides the settings file)
    #[arg(short, long, value_enum, ignore_case = true)]
    pub starting_player: Option<PlayerArg>,

    /// Undos allowed between moves (overrides the settings file)
    #[arg(short, long)]
    pub undo_budget: Option<u32>,
}

/// Player choice on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayerArg {
    /// Player X
    X,
    /// Player O
    O,
}

impl From<PlayerArg> for Player {
    fn from(arg: PlayerArg) -> Self {
        match arg {
            PlayerArg::X => Player::X,
            PlayerArg::O => Player::O,
        }
    }
}

impl Cli {
    /// Builds settings from the optional file plus flag overrides.
    #[instrument(skip(self), fields(config = ?self.config))]
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let mut settings = match &self.config {
            Some(path) => Settings::from_file(path)?,
            None => Settings::default(),
        };

        if let Some(duration) = self.duration {
            settings = settings.with_turn_duration(duration);
        }
        if let Some(player) = self.starting_player {
            settings = settings.with_starting_player(player.into());
        }
        if let Some(budget) = self.undo_budget {
            settings = settings.with_undo_budget(budget);
        }

        settings.validate()?;
        debug!(?settings, "Resolved settings");
        Ok(settings)
    }
}
