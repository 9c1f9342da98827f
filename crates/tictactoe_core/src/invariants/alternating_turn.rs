//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{MoveLog, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Read in play order the log must show X, O, X, O, ...
/// The first move is always X.
pub struct AlternatingTurnInvariant;

impl Invariant<MoveLog> for AlternatingTurnInvariant {
    fn holds(log: &MoveLog) -> bool {
        let mut expected = Player::X;
        for mov in log.oldest_first() {
            if mov.player() != expected {
                return false;
            }
            expected = expected.opponent();
        }
        true
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
