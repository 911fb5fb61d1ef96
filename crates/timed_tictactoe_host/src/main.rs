//! Timed Tic-Tac-Toe - terminal host.

use anyhow::{Context, Result};
use clap::Parser;
use timed_tictactoe::Session;
use timed_tictactoe_host::{Cli, run};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = cli.settings().context("Failed to load settings")?;

    info!(
        duration = settings.turn_duration(),
        starting_player = %settings.starting_player(),
        undo_budget = settings.undo_budget(),
        "Starting timed tic-tac-toe"
    );

    let input = BufReader::new(tokio::io::stdin());
    let mut output = tokio::io::stdout();
    run(Session::new(settings), input, &mut output).await?;

    Ok(())
}
