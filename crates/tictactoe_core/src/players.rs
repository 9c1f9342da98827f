//! Display names for the two symbols.

use super::Player;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Default display name for X.
pub const DEFAULT_X_NAME: &str = "Player 1";
/// Default display name for O.
pub const DEFAULT_O_NAME: &str = "Player 2";

/// Mapping from symbol to display name.
///
/// Lives independently of the move log: renaming never touches game
/// progress and restarting never resets names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRegistry {
    x: String,
    o: String,
}

impl PlayerRegistry {
    /// Creates a registry with the given names.
    pub fn new(x: impl Into<String>, o: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            o: o.into(),
        }
    }

    /// Returns the display name bound to `symbol`.
    pub fn display_name(&self, symbol: Player) -> &str {
        match symbol {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }

    /// Replaces the display name bound to `symbol`.
    #[instrument(skip(self, name))]
    pub fn rename(&mut self, symbol: Player, name: impl Into<String>) {
        let name = name.into();
        info!(%symbol, %name, "Renaming player");
        match symbol {
            Player::X => self.x = name,
            Player::O => self.o = name,
        }
    }
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_X_NAME, DEFAULT_O_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let registry = PlayerRegistry::default();
        assert_eq!(registry.display_name(Player::X), "Player 1");
        assert_eq!(registry.display_name(Player::O), "Player 2");
    }

    #[test]
    fn test_rename_touches_only_one_symbol() {
        let mut registry = PlayerRegistry::default();
        registry.rename(Player::O, "Bob");
        assert_eq!(registry.display_name(Player::O), "Bob");
        assert_eq!(registry.display_name(Player::X), "Player 1");
    }
}
