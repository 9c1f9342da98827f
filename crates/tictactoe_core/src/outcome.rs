//! Derived round outcome.

use super::Player;
use serde::{Deserialize, Serialize};

/// Outcome of the current round. Computed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GameOutcome {
    /// Moves are still being accepted.
    InProgress,
    /// A line is complete.
    Won {
        /// Symbol holding the winning line.
        symbol: Player,
        /// Display name bound to that symbol when the outcome was computed.
        name: String,
    },
    /// All squares filled with no complete line.
    Drawn,
}

impl GameOutcome {
    /// Returns the winner's display name if there is one.
    pub fn winner_name(&self) -> Option<&str> {
        match self {
            GameOutcome::Won { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Returns true once the round accepts no more moves.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Won { name, .. } => write!(f, "{} won!", name),
            GameOutcome::Drawn => write!(f, "It's a draw!"),
        }
    }
}
