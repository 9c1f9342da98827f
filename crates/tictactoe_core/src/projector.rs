//! Board projection from the move log.

use super::move_log::MoveLog;
use super::{Board, Square};
use tracing::instrument;

/// Replays every move onto a fresh empty board.
///
/// Moves are applied oldest first, so if a log ever repeated a position the
/// newest mark would be the visible one.
#[instrument(skip(log), fields(moves = log.len()))]
pub fn project_board(log: &MoveLog) -> Board {
    let mut board = Board::new();
    for mov in log.oldest_first() {
        board.set(mov.position(), Square::Occupied(mov.player()));
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player, Position};

    #[test]
    fn test_empty_log_projects_empty_board() {
        assert_eq!(project_board(&MoveLog::new()), Board::new());
    }

    #[test]
    fn test_projection_is_idempotent() {
        let log = MoveLog::from_newest_first([
            Move::new(Player::O, Position::CENTER),
            Move::new(Player::X, Position::TOP_LEFT),
        ]);
        let first = project_board(&log);
        let second = project_board(&log);
        assert_eq!(first, second);
        assert_eq!(first.get(Position::CENTER), Square::Occupied(Player::O));
        assert_eq!(first.get(Position::TOP_LEFT), Square::Occupied(Player::X));
        assert_eq!(first.occupied_count(), 2);
    }

    #[test]
    fn test_projection_is_order_independent() {
        let moves = [
            Move::new(Player::X, Position::TOP_LEFT),
            Move::new(Player::O, Position::CENTER),
            Move::new(Player::X, Position::BOTTOM_RIGHT),
        ];
        let forward = project_board(&MoveLog::from_newest_first(moves));
        let reversed = project_board(&MoveLog::from_newest_first(moves.into_iter().rev()));
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_duplicate_position_newest_wins() {
        let log = MoveLog::from_newest_first([
            Move::new(Player::O, Position::CENTER),
            Move::new(Player::X, Position::CENTER),
        ]);
        assert_eq!(
            project_board(&log).get(Position::CENTER),
            Square::Occupied(Player::O)
        );
    }
}
