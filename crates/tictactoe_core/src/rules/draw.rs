//! Draw detection logic for tic-tac-toe.

use super::super::move_log::MAX_MOVES;
use super::super::Board;
use super::win::winning_symbol;
use tracing::instrument;

/// A round is drawn once all nine moves are in and no line is complete.
#[instrument(skip(board))]
pub fn is_draw(board: &Board, move_count: usize) -> bool {
    move_count == MAX_MOVES && winning_symbol(board).is_none()
}
