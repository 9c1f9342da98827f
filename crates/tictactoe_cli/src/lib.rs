//! Terminal driver for a tic-tac-toe session.
//!
//! Renders the grid, player list and move log as text and maps typed
//! commands onto the session's command surface.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod command;
mod config;
pub mod render;

pub use app::{App, Flow};
pub use cli::Cli;
pub use command::{Command, CommandError, HELP};
pub use config::{ConfigError, GameConfig};
