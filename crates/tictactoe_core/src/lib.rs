//! Tic-tac-toe session logic.
//!
//! Two named players alternately mark a 3x3 grid. The move log is the single
//! source of truth; everything else is derived from it on demand.
//!
//! # Architecture
//!
//! - **Move log**: newest-first history of moves ([`MoveLog`])
//! - **Turn resolver**: who moves next ([`active_player`])
//! - **Board projector**: grid contents from the log ([`project_board`])
//! - **Outcome detector**: winner lookup over 8 fixed lines ([`detect_winner`])
//! - **Session controller**: names, log and user actions ([`SessionController`])
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameOutcome, Player, SessionController};
//!
//! let mut session = SessionController::default();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     session.select_square(row, col)?;
//! }
//! session.rename_player(Player::X, "Alice");
//! assert_eq!(session.game_outcome().winner_name(), Some("Alice"));
//! assert!(!matches!(session.game_outcome(), GameOutcome::InProgress));
//! # Ok::<(), tictactoe_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
pub mod invariants;
mod move_log;
mod outcome;
mod players;
mod position;
mod projector;
pub mod rules;
mod session;
mod turn;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{Contract, GameNotOver, SelectSquareContract, SquareIsEmpty};
pub use move_log::{MAX_MOVES, MoveLog};
pub use outcome::GameOutcome;
pub use players::{DEFAULT_O_NAME, DEFAULT_X_NAME, PlayerRegistry};
pub use position::Position;
pub use projector::project_board;
pub use rules::{WINNING_COMBINATIONS, detect_winner, winning_symbol};
pub use session::{SessionController, SessionSnapshot};
pub use turn::active_player;
pub use types::{Board, Player, Square};
