//! Unique positions invariant: each square is marked at most once.

use super::super::{MoveLog, project_board};
use super::Invariant;

/// Invariant: No two moves share a position.
///
/// Every move must leave its own mark on the projected board, so the
/// number of occupied squares equals the number of moves.
pub struct UniquePositionsInvariant;

impl Invariant<MoveLog> for UniquePositionsInvariant {
    fn holds(log: &MoveLog) -> bool {
        project_board(log).occupied_count() == log.len()
    }

    fn description() -> &'static str {
        "Each square is marked at most once"
    }
}
