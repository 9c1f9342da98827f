//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a projected board.
//! Rules are separated from board storage so the session can compose them.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{WINNING_COMBINATIONS, detect_winner, winning_symbol};
