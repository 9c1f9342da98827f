//! Tests for the session controller's command and query surface.

use tictactoe_core::{
    Board, GameOutcome, MoveError, Player, Position, SessionController, Square, detect_winner,
};

fn play(session: &mut SessionController, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        session.select_square(row, col).expect("Legal move");
    }
}

const X_TOP_ROW: [(usize, usize); 5] = [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)];

// X O X / X O O / O X X
const DRAW: [(usize, usize); 9] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 1),
    (1, 0),
    (1, 2),
    (2, 1),
    (2, 0),
    (2, 2),
];

#[test]
fn test_top_row_win() {
    let mut session = SessionController::default();
    play(&mut session, &X_TOP_ROW);

    let board = session.current_board();
    assert_eq!(board.rows()[0], [Square::Occupied(Player::X); 3]);
    assert_eq!(
        detect_winner(&board, session.players()),
        Some("Player 1".to_string())
    );
    assert_eq!(
        session.game_outcome(),
        GameOutcome::Won {
            symbol: Player::X,
            name: "Player 1".to_string(),
        }
    );
}

#[test]
fn test_no_moves_after_win() {
    let mut session = SessionController::default();
    play(&mut session, &X_TOP_ROW);
    let board = session.current_board();

    let result = session.select_square(2, 0);
    assert_eq!(result, Err(MoveError::GameOver));
    assert!(result.unwrap_err().is_illegal_move());
    assert_eq!(session.move_history().len(), 5);
    assert_eq!(session.current_board(), board);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut session = SessionController::default();
    play(&mut session, &DRAW);

    assert_eq!(session.game_outcome(), GameOutcome::Drawn);
    assert_eq!(session.winner_name(), None);
    assert_eq!(session.select_square(0, 0), Err(MoveError::GameOver));
}

#[test]
fn test_win_on_ninth_move_is_not_a_draw() {
    let mut session = SessionController::default();
    // X O X / O X O / O X X: the last X completes the main diagonal.
    play(
        &mut session,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 1),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );

    assert_eq!(session.move_history().len(), 9);
    assert_eq!(
        session.game_outcome(),
        GameOutcome::Won {
            symbol: Player::X,
            name: "Player 1".to_string(),
        }
    );
    assert_eq!(session.select_square(0, 0), Err(MoveError::GameOver));
}

#[test]
fn test_rename_after_win_changes_winner_name() {
    let mut session = SessionController::default();
    play(&mut session, &X_TOP_ROW);
    let board = session.current_board();

    session.rename_player(Player::X, "Alice");

    assert_eq!(session.game_outcome().winner_name(), Some("Alice"));
    assert_eq!(session.winner_name(), Some("Alice".to_string()));
    assert_eq!(session.player_display_name(Player::X), "Alice");
    assert_eq!(session.move_history().len(), 5);
    assert_eq!(session.current_board(), board);
}

#[test]
fn test_occupied_square_rejected() {
    let mut session = SessionController::default();
    play(&mut session, &[(1, 1)]);
    let board = session.current_board();

    let result = session.select_square(1, 1);
    assert_eq!(result, Err(MoveError::SquareOccupied(Position::CENTER)));
    assert!(result.unwrap_err().is_illegal_move());
    assert_eq!(session.move_history().len(), 1);
    assert_eq!(session.current_board(), board);
    assert_eq!(session.active_player(), Player::O);
}

#[test]
fn test_restart_resets_board_but_keeps_names() {
    let mut session = SessionController::default();
    session.rename_player(Player::O, "Bob");
    play(&mut session, &X_TOP_ROW);

    session.restart();

    assert_eq!(session.current_board(), Board::new());
    assert_eq!(session.active_player(), Player::X);
    assert_eq!(session.game_outcome(), GameOutcome::InProgress);
    assert!(session.move_history().is_empty());
    assert_eq!(session.player_display_name(Player::O), "Bob");

    // A fresh round accepts moves again.
    assert!(session.select_square(2, 0).is_ok());
}

#[test]
fn test_turn_parity_through_a_full_round() {
    let mut session = SessionController::default();
    for (n, &(row, col)) in DRAW.iter().enumerate() {
        let expected = if n % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(session.active_player(), expected);
        let mov = session.select_square(row, col).expect("Legal move");
        assert_eq!(mov.player(), expected);
    }
}

#[test]
fn test_old_board_snapshots_are_not_mutated() {
    let mut session = SessionController::default();
    play(&mut session, &[(0, 0)]);
    let before = session.current_board();

    play(&mut session, &[(1, 1)]);

    assert_eq!(before.occupied_count(), 1);
    assert_eq!(session.current_board().occupied_count(), 2);
}

#[test]
fn test_snapshot_serializes_to_json() {
    let mut session = SessionController::default();
    play(&mut session, &X_TOP_ROW);

    let json = serde_json::to_value(session.snapshot()).expect("Serializable");
    assert_eq!(json["outcome"]["status"], "won");
    assert_eq!(json["outcome"]["name"], "Player 1");
    assert_eq!(json["history"].as_array().map(Vec::len), Some(5));
    assert_eq!(json["history"][0]["position"]["row"], 0);
    assert_eq!(json["history"][0]["position"]["col"], 2);
}
