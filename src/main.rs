//! Console tic-tac-toe for two players sharing a terminal.

use anyhow::{Context, Result};
use noughts::{ConsoleSource, Game};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the game.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting noughts");

    let game = Game::new();
    let source = ConsoleSource::new(
        "console",
        BufReader::new(tokio::io::stdin()),
        game.events(),
    );

    let (outcome, _stdout) = game
        .play(source, tokio::io::stdout())
        .await
        .context("Game ended without a winner")?;

    info!(winner = %outcome.winner(), "Exiting");
    Ok(())
}
