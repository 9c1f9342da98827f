//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, PlayerRegistry, Position};
use tracing::{debug, instrument};

/// The 8 winning lines: rows, then columns, then diagonals.
pub const WINNING_COMBINATIONS: [[Position; 3]; 8] = [
    // Rows
    [Position::TOP_LEFT, Position::TOP_CENTER, Position::TOP_RIGHT],
    [Position::MIDDLE_LEFT, Position::CENTER, Position::MIDDLE_RIGHT],
    [
        Position::BOTTOM_LEFT,
        Position::BOTTOM_CENTER,
        Position::BOTTOM_RIGHT,
    ],
    // Columns
    [Position::TOP_LEFT, Position::MIDDLE_LEFT, Position::BOTTOM_LEFT],
    [Position::TOP_CENTER, Position::CENTER, Position::BOTTOM_CENTER],
    [
        Position::TOP_RIGHT,
        Position::MIDDLE_RIGHT,
        Position::BOTTOM_RIGHT,
    ],
    // Diagonals
    [Position::TOP_LEFT, Position::CENTER, Position::BOTTOM_RIGHT],
    [Position::TOP_RIGHT, Position::CENTER, Position::BOTTOM_LEFT],
];

/// Returns the symbol holding a complete line, if any.
///
/// Every line is checked in declared order and a later match overwrites an
/// earlier one, so when two lines are complete the last one decides.
#[instrument(skip(board))]
pub fn winning_symbol(board: &Board) -> Option<Player> {
    let mut winner = None;
    for [a, b, c] in WINNING_COMBINATIONS {
        if let Some(player) = board.get(a).player()
            && board.get(b).player() == Some(player)
            && board.get(c).player() == Some(player)
        {
            debug!(%player, line = ?[a, b, c], "Complete line");
            winner = Some(player);
        }
    }
    winner
}

/// Returns the display name of the winner, if any line is complete.
///
/// Names are resolved at call time, so a rename after the win shows up here.
#[instrument(skip(board, players))]
pub fn detect_winner(board: &Board, players: &PlayerRegistry) -> Option<String> {
    winning_symbol(board).map(|symbol| players.display_name(symbol).to_string())
}
