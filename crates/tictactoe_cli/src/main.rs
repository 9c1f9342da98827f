//! tictactoe - two players, one keyboard.

use anyhow::Result;
use clap::Parser;
use tictactoe_cli::{App, Cli, GameConfig};
use tictactoe_core::SessionController;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    let config = config.with_overrides(cli.player_x, cli.player_o);
    info!(?config, "Starting session");

    let mut app = App::new(SessionController::new(config.registry()));
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    app.run(stdin.lock(), stdout.lock())
}
