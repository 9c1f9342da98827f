//! Session controller: owns player names and the move log.

use super::contracts::{Contract, SelectSquareContract};
use super::rules::{detect_winner, is_draw, winning_symbol};
use super::{
    Board, GameOutcome, Move, MoveError, MoveLog, Player, PlayerRegistry, Position,
    active_player, project_board,
};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// One two-player session.
///
/// The move log is the only game state stored; board, turn and outcome are
/// re-derived from it on every query.
#[derive(Debug, Clone, Default)]
pub struct SessionController {
    players: PlayerRegistry,
    log: MoveLog,
}

impl SessionController {
    /// Creates a session with the given player names and an empty board.
    #[instrument(skip(players))]
    pub fn new(players: PlayerRegistry) -> Self {
        info!(
            x = players.display_name(Player::X),
            o = players.display_name(Player::O),
            "Creating session"
        );
        Self {
            players,
            log: MoveLog::new(),
        }
    }

    // ── Queries ────────────────────────────────────────────

    /// Projects the current board from the move log.
    pub fn current_board(&self) -> Board {
        project_board(&self.log)
    }

    /// Symbol that moves next.
    pub fn active_player(&self) -> Player {
        active_player(&self.log)
    }

    /// Derives the outcome of the current round.
    #[instrument(skip(self), fields(moves = self.log.len()))]
    pub fn game_outcome(&self) -> GameOutcome {
        let board = self.current_board();
        if let Some(symbol) = winning_symbol(&board) {
            return GameOutcome::Won {
                symbol,
                name: self.players.display_name(symbol).to_string(),
            };
        }
        if is_draw(&board, self.log.len()) {
            return GameOutcome::Drawn;
        }
        GameOutcome::InProgress
    }

    /// Display name of the winner, if a line is complete.
    pub fn winner_name(&self) -> Option<String> {
        detect_winner(&self.current_board(), &self.players)
    }

    /// Move history, newest first.
    pub fn move_history(&self) -> &MoveLog {
        &self.log
    }

    /// Display name bound to `symbol`.
    pub fn player_display_name(&self, symbol: Player) -> &str {
        self.players.display_name(symbol)
    }

    /// Player names.
    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    /// Captures every derived value at once for a renderer.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: self.current_board(),
            active_player: self.active_player(),
            outcome: self.game_outcome(),
            history: self.log.iter().copied().collect(),
            players: self.players.clone(),
        }
    }

    // ── Commands ───────────────────────────────────────────

    /// Marks the square at `row`,`col` for the active player.
    ///
    /// Rejects coordinates off the board, occupied squares and any move once
    /// the round is won or drawn. A rejected selection leaves the session
    /// untouched.
    #[instrument(skip(self))]
    pub fn select_square(&mut self, row: usize, col: usize) -> Result<Move, MoveError> {
        let pos = Position::new(row, col)?;
        SelectSquareContract::pre(self, &pos)?;

        let mov = Move::new(self.active_player(), pos);

        #[cfg(debug_assertions)]
        let before = self.log.clone();

        self.log.prepend(mov);

        #[cfg(debug_assertions)]
        if let Err(e) = SelectSquareContract::post(self) {
            self.log = before;
            return Err(e);
        }

        debug!(%mov, moves = self.log.len(), "Move recorded");
        Ok(mov)
    }

    /// Binds a new display name to `symbol`. Game progress is unaffected.
    #[instrument(skip(self, name))]
    pub fn rename_player(&mut self, symbol: Player, name: impl Into<String>) {
        self.players.rename(symbol, name);
    }

    /// Clears the move log. Player names are kept.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(discarded = self.log.len(), "Restarting round");
        self.log.clear();
    }
}

/// Read-only view of a session for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Projected board.
    board: Board,
    /// Symbol that moves next.
    active_player: Player,
    /// Derived outcome.
    outcome: GameOutcome,
    /// Moves, newest first.
    history: Vec<Move>,
    /// Player names.
    players: PlayerRegistry,
}
