//! Line commands accepted on stdin.

use std::str::FromStr;

use derive_more::{Display, Error};
use timed_tictactoe::{Player, Position, Session};
use tracing::instrument;

/// A parsed stdin command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    /// Mark a square for the current player.
    Play(Position),
    /// Step back one snapshot.
    Undo,
    /// Jump to a history index.
    Jump(usize),
    /// Clear the board and scores.
    Restart,
    /// Apply a raw duration and a starting player.
    Settings {
        /// Duration text as typed; validated by the session.
        duration: String,
        /// Starting player for the next restart. `None` keeps the current one.
        starting_player: Option<Player>,
    },
    /// Switch between light and dark.
    Theme,
    /// Redraw the session.
    Show,
    /// Leave the host.
    Quit,
}

/// Why a line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseCommandError {
    /// Blank input.
    #[display("Empty command")]
    Empty,
    /// First word is not a known command.
    #[display("Unknown command '{}'", _0)]
    Unknown(#[error(not(source))] String),
    /// A required argument is absent.
    #[display("'{}' needs {}", command, expected)]
    MissingArgument {
        /// Command word.
        command: &'static str,
        /// What was expected.
        expected: &'static str,
    },
    /// Argument could not be read.
    #[display("Invalid argument '{}' for '{}'", value, command)]
    InvalidArgument {
        /// Command word.
        command: &'static str,
        /// Offending text.
        value: String,
    },
}

impl FromStr for HostCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(ParseCommandError::Empty);
        };

        match head.to_lowercase().as_str() {
            "play" | "p" => {
                // Labels may contain spaces ("top left"), so rejoin the tail.
                let rest = words.collect::<Vec<_>>().join(" ");
                if rest.is_empty() {
                    return Err(ParseCommandError::MissingArgument {
                        command: "play",
                        expected: "a square (0-8 or a label)",
                    });
                }
                Position::from_label_or_number(&rest)
                    .map(HostCommand::Play)
                    .ok_or(ParseCommandError::InvalidArgument {
                        command: "play",
                        value: rest,
                    })
            }
            "undo" | "u" => Ok(HostCommand::Undo),
            "jump" | "j" => {
                let value = words.next().ok_or(ParseCommandError::MissingArgument {
                    command: "jump",
                    expected: "a history index",
                })?;
                value
                    .parse()
                    .map(HostCommand::Jump)
                    .map_err(|_| ParseCommandError::InvalidArgument {
                        command: "jump",
                        value: value.to_string(),
                    })
            }
            "restart" | "r" => Ok(HostCommand::Restart),
            "settings" | "s" => {
                let duration = words.next().ok_or(ParseCommandError::MissingArgument {
                    command: "settings",
                    expected: "a duration in seconds",
                })?;
                let starting_player = words
                    .next()
                    .map(|label| {
                        Player::from_label(label).ok_or(ParseCommandError::InvalidArgument {
                            command: "settings",
                            value: label.to_string(),
                        })
                    })
                    .transpose()?;
                Ok(HostCommand::Settings {
                    duration: duration.to_string(),
                    starting_player,
                })
            }
            "theme" | "t" => Ok(HostCommand::Theme),
            "show" => Ok(HostCommand::Show),
            "quit" | "q" | "exit" => Ok(HostCommand::Quit),
            other => Err(ParseCommandError::Unknown(other.to_string())),
        }
    }
}

impl HostCommand {
    /// Applies the command to a session.
    ///
    /// Rejected commands leave the session unchanged. `Show` and `Quit`
    /// are handled by the host loop and pass the session through.
    #[instrument(skip(session), fields(pointer = session.pointer()))]
    pub fn apply(self, session: Session) -> Session {
        match self {
            HostCommand::Play(pos) => session.play_move(pos.to_index()),
            HostCommand::Undo => session.undo(),
            HostCommand::Jump(index) => session.jump_to(index),
            HostCommand::Restart => session.restart(),
            HostCommand::Settings {
                duration,
                starting_player,
            } => {
                let starting = starting_player.unwrap_or(*session.settings().starting_player());
                session.apply_settings_input(&duration, starting)
            }
            HostCommand::Theme => session.toggle_theme(),
            HostCommand::Show | HostCommand::Quit => session,
        }
    }
}

/// Short usage text printed on bad input.
pub const HELP: &str = "Commands: play <0-8|label>, undo, jump <n>, restart, \
settings <seconds> [X|O], theme, show, quit";
