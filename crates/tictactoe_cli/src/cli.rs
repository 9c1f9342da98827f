//! Command-line interface for the tictactoe binary.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe with a friend at one keyboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML file with player names
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Display name for X (overrides the config file)
    #[arg(long)]
    pub player_x: Option<String>,

    /// Display name for O (overrides the config file)
    #[arg(long)]
    pub player_o: Option<String>,
}
