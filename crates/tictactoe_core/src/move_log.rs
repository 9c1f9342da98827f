//! Newest-first move history, the single source of truth for a round.

use super::action::Move;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of moves in one round (one per square).
pub const MAX_MOVES: usize = 9;

/// Ordered history of moves, newest first.
///
/// Only the session controller appends to or clears a log; every other
/// component reads it. [`MoveLog::from_newest_first`] builds arbitrary logs
/// for replay and does not validate them; use the invariants module for that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveLog {
    moves: VecDeque<Move>,
}

impl MoveLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a log from moves already ordered newest first.
    pub fn from_newest_first(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    /// Most recently recorded move.
    pub fn latest(&self) -> Option<&Move> {
        self.moves.front()
    }

    /// Number of recorded moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true when no moves have been recorded.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Iterates newest to oldest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Move> + ExactSizeIterator {
        self.moves.iter()
    }

    /// Iterates oldest to newest (play order).
    pub fn oldest_first(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter().rev()
    }

    pub(crate) fn prepend(&mut self, mov: Move) {
        self.moves.push_front(mov);
    }

    pub(crate) fn clear(&mut self) {
        self.moves.clear();
    }
}
