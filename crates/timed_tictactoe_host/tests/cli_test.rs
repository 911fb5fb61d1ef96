//! Tests for command-line settings resolution.

use std::io::Write;

use clap::Parser;
use tempfile::NamedTempFile;
use timed_tictactoe::{Player, Settings};
use timed_tictactoe_host::Cli;

#[test]
fn test_no_flags_gives_defaults() {
    let cli = Cli::try_parse_from(["timed_tictactoe"]).expect("Parse failed");
    assert_eq!(cli.settings().expect("Settings failed"), Settings::default());
}

#[test]
fn test_flags_override_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(b"turn_duration = 30\nundo_budget = 1\n")
        .expect("Failed to write settings");
    let path = file.path().to_string_lossy().into_owned();

    let cli = Cli::try_parse_from([
        "timed_tictactoe",
        "--config",
        &path,
        "--duration",
        "5",
        "--starting-player",
        "o",
    ])
    .expect("Parse failed");
    let settings = cli.settings().expect("Settings failed");

    assert_eq!(*settings.turn_duration(), 5);
    assert_eq!(*settings.starting_player(), Player::O);
    assert_eq!(*settings.undo_budget(), 1);
}

#[test]
fn test_zero_duration_flag_is_rejected() {
    let cli = Cli::try_parse_from(["timed_tictactoe", "--duration", "0"]).expect("Parse failed");
    assert!(cli.settings().is_err());
}
