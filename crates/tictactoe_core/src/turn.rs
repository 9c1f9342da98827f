//! Turn resolution from the move log.

use super::move_log::MoveLog;
use super::Player;
use tracing::instrument;

/// Returns the symbol that moves next.
///
/// X opens; afterwards the turn goes to whoever did not make the newest
/// move. Alternation itself is not re-verified here.
#[instrument(skip(log), fields(moves = log.len()))]
pub fn active_player(log: &MoveLog) -> Player {
    match log.latest() {
        None => Player::X,
        Some(last) if last.player() == Player::X => Player::O,
        Some(_) => Player::X,
    }
}
