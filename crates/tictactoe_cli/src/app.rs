//! Interactive loop wiring commands to a session.

use crate::command::{Command, HELP};
use crate::render;
use anyhow::Result;
use std::io::{BufRead, Write};
use tictactoe_core::SessionController;
use tracing::{debug, info, instrument, warn};

/// Whether the loop keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop.
    Quit,
}

/// Terminal front-end for one session.
#[derive(Debug)]
pub struct App {
    session: SessionController,
}

impl App {
    /// Wraps a session.
    pub fn new(session: SessionController) -> Self {
        Self { session }
    }

    /// Session being played.
    pub fn session(&self) -> &SessionController {
        &self.session
    }

    /// Reads commands until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        writeln!(output, "{}\n", render::session(&self.session))?;
        writeln!(output, "Type `help` for commands.")?;

        for line in input.lines() {
            let line = line?;
            let flow = match Command::parse(&line) {
                Ok(Some(command)) => self.handle(command, &mut output)?,
                Ok(None) => Flow::Continue,
                Err(e) => {
                    debug!(error = %e, "Unparseable input");
                    writeln!(output, "{}", e)?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }

        info!(moves = self.session.move_history().len(), "Leaving session");
        Ok(())
    }

    /// Applies one command and writes its result.
    #[instrument(skip(self, output))]
    pub fn handle(&mut self, command: Command, mut output: impl Write) -> Result<Flow> {
        match command {
            Command::Move { row, col } => match self.session.select_square(row, col) {
                Ok(_) => writeln!(output, "{}", render::session(&self.session))?,
                Err(e) => {
                    warn!(row, col, error = %e, "Move rejected");
                    writeln!(output, "{}", e)?;
                }
            },
            Command::Rename { symbol, name } => {
                self.session.rename_player(symbol, name);
                writeln!(output, "{}", render::session(&self.session))?;
            }
            Command::Restart => {
                self.session.restart();
                writeln!(output, "{}", render::session(&self.session))?;
            }
            Command::Log => {
                writeln!(output, "{}", render::log(&self.session))?;
            }
            Command::State => {
                writeln!(
                    output,
                    "{}",
                    serde_json::to_string_pretty(&self.session.snapshot())?
                )?;
            }
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}
