//! Headless host for timed tic-tac-toe.
//!
//! Owns the one-second clock and a line-oriented command reader, and feeds
//! both into a [`timed_tictactoe::Session`] one event at a time.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod command;
pub mod host;
pub mod render;

pub use cli::{Cli, PlayerArg};
pub use command::{HostCommand, ParseCommandError};
pub use host::run;
