//! Bounded length invariant: a round never holds more than nine moves.

use super::super::MoveLog;
use super::super::move_log::MAX_MOVES;
use super::Invariant;

/// Invariant: Log length never exceeds the number of squares.
pub struct BoundedLengthInvariant;

impl Invariant<MoveLog> for BoundedLengthInvariant {
    fn holds(log: &MoveLog) -> bool {
        log.len() <= MAX_MOVES
    }

    fn description() -> &'static str {
        "Move log holds at most nine moves"
    }
}
