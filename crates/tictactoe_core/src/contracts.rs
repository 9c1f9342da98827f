//! Contract-based validation for square selection.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}

use super::action::MoveError;
use super::invariants::{InvariantSet, MoveLogInvariants};
use super::{Board, Position, SessionController};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(after: &S) -> Result<(), MoveError>;
}

/// Precondition: The round has not been won or drawn.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects with [`MoveError::GameOver`] in a terminal state.
    #[instrument(skip(session))]
    pub fn check(session: &SessionController) -> Result<(), MoveError> {
        if session.game_outcome().is_terminal() {
            warn!("Selection attempted after the round ended");
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The selected square must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects with [`MoveError::SquareOccupied`] if `pos` is marked on `board`.
    #[instrument(skip(board))]
    pub fn check(pos: Position, board: &Board) -> Result<(), MoveError> {
        if !board.is_empty(pos) {
            warn!(%pos, "Selection of an occupied square");
            Err(MoveError::SquareOccupied(pos))
        } else {
            Ok(())
        }
    }
}

/// Contract for square selection.
///
/// Preconditions:
/// - Round still in progress
/// - Square must be empty
///
/// Postconditions:
/// - Every move-log invariant holds
pub struct SelectSquareContract;

impl Contract<SessionController, Position> for SelectSquareContract {
    fn pre(session: &SessionController, pos: &Position) -> Result<(), MoveError> {
        GameNotOver::check(session)?;
        SquareIsEmpty::check(*pos, &session.current_board())
    }

    fn post(after: &SessionController) -> Result<(), MoveError> {
        MoveLogInvariants::check_all(after.move_history()).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
