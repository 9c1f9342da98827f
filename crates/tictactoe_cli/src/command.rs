//! Line commands typed at the prompt.

use derive_more::{Display, Error};
use std::num::{IntErrorKind, ParseIntError};
use tictactoe_core::Player;
use tracing::instrument;

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  move <row> <col>      mark a square (rows and columns run 0-2), alias: m
  rename <X|O> <name>   change a player's name
  restart               clear the board, keep the names
  log                   list moves, newest first
  state                 print the session as JSON
  help                  show this message
  quit                  leave, alias: exit";

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Select a square.
    Move {
        /// Row index as typed.
        row: usize,
        /// Column index as typed.
        col: usize,
    },
    /// Rename a player.
    Rename {
        /// Symbol to rename.
        symbol: Player,
        /// New display name.
        name: String,
    },
    /// Clear the move log.
    Restart,
    /// Print the move log.
    Log,
    /// Print the JSON snapshot.
    State,
    /// Print help.
    Help,
    /// Leave the loop.
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    #[instrument]
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "" => return Ok(None),
            "move" | "m" => {
                let mut args = rest.split_whitespace();
                let (Some(row), Some(col), None) = (args.next(), args.next(), args.next()) else {
                    return Err(CommandError::new("Usage: move <row> <col>".to_string()));
                };
                Command::Move {
                    row: parse_index(row)?,
                    col: parse_index(col)?,
                }
            }
            "rename" => {
                let Some((symbol, name)) = rest.split_once(char::is_whitespace) else {
                    return Err(CommandError::new("Usage: rename <X|O> <name>".to_string()));
                };
                let symbol = symbol
                    .parse::<Player>()
                    .map_err(|_| CommandError::new(format!("Unknown symbol: {}", symbol)))?;
                Command::Rename {
                    symbol,
                    name: name.trim().to_string(),
                }
            }
            "restart" => Command::Restart,
            "log" => Command::Log,
            "state" => Command::State,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::new(format!("Unknown command: {}", other))),
        };
        Ok(Some(command))
    }
}

fn parse_index(s: &str) -> Result<usize, CommandError> {
    s.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => {
            CommandError::new(format!("Out of range: {} (rows and columns run 0-2)", s))
        }
        _ => CommandError::new(format!("Not a number: {}", s)),
    })
}

/// Command parsing error.
#[derive(Debug, Clone, Display, Error)]
#[display("{}", message)]
pub struct CommandError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CommandError {
    /// Creates a new command error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
