//! Text rendering of a session.

use tictactoe_core::{Board, GameOutcome, Player, SessionController, Square};

/// Player list, marking whose turn it is while the round is open.
pub fn players(session: &SessionController) -> String {
    let outcome = session.game_outcome();
    let active = session.active_player();
    [Player::X, Player::O]
        .iter()
        .map(|&symbol| {
            let marker = if !outcome.is_terminal() && symbol == active {
                " *"
            } else {
                ""
            };
            format!("{}: {}{}", symbol, session.player_display_name(symbol), marker)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Grid with row and column numbers.
pub fn board(board: &Board) -> String {
    let mut out = String::from("    0   1   2\n");
    for (row, squares) in board.rows().iter().enumerate() {
        let cells: Vec<String> = squares
            .iter()
            .map(|square| match square {
                Square::Empty => " ".to_string(),
                Square::Occupied(player) => player.to_string(),
            })
            .collect();
        out.push_str(&format!("{}   {}\n", row, cells.join(" | ")));
        if row < 2 {
            out.push_str("   ---+---+---\n");
        }
    }
    out
}

/// One-line status under the grid.
pub fn status(session: &SessionController) -> String {
    match session.game_outcome() {
        GameOutcome::InProgress => {
            let symbol = session.active_player();
            format!("{} ({}) to move", session.player_display_name(symbol), symbol)
        }
        outcome => outcome.to_string(),
    }
}

/// Move log, newest first, with names resolved now.
pub fn log(session: &SessionController) -> String {
    let log = session.move_history();
    if log.is_empty() {
        return "No moves yet".to_string();
    }
    log.iter()
        .map(|mov| {
            format!(
                "{} ({}) selected {}",
                session.player_display_name(mov.player()),
                mov.player(),
                mov.position()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Players, grid and status together.
pub fn session(session: &SessionController) -> String {
    format!(
        "{}\n\n{}\n{}",
        players(session),
        board(&session.current_board()),
        status(session)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_layout() {
        let mut session = SessionController::default();
        session.select_square(0, 0).unwrap();
        session.select_square(2, 2).unwrap();

        let expected = "    0   1   2\n\
                        0   X |   |  \n   ---+---+---\n\
                        1     |   |  \n   ---+---+---\n\
                        2     |   | O\n";
        assert_eq!(board(&session.current_board()), expected);
    }

    #[test]
    fn test_players_mark_active_until_round_ends() {
        let mut session = SessionController::default();
        assert_eq!(players(&session), "X: Player 1 *\nO: Player 2");

        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
            session.select_square(row, col).unwrap();
        }
        assert_eq!(players(&session), "X: Player 1\nO: Player 2");
    }

    #[test]
    fn test_status_lines() {
        let mut session = SessionController::default();
        assert_eq!(status(&session), "Player 1 (X) to move");

        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
            session.select_square(row, col).unwrap();
        }
        session.rename_player(Player::X, "Alice");
        assert_eq!(status(&session), "Alice won!");
    }

    #[test]
    fn test_log_newest_first() {
        let mut session = SessionController::default();
        assert_eq!(log(&session), "No moves yet");

        session.select_square(1, 1).unwrap();
        session.select_square(0, 2).unwrap();
        assert_eq!(
            log(&session),
            "Player 2 (O) selected 0,2\nPlayer 1 (X) selected 1,1"
        );
    }
}
