//! Validated board coordinates.

use super::action::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the 3x3 board, addressed by row and column (both 0-2).
///
/// The only public way to build a `Position` from raw coordinates is
/// [`Position::new`], which rejects anything off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition", into = "RawPosition")]
pub struct Position {
    row: u8,
    col: u8,
}

#[derive(Serialize, Deserialize)]
struct RawPosition {
    row: usize,
    col: usize,
}

impl TryFrom<RawPosition> for Position {
    type Error = MoveError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.row, raw.col)
    }
}

impl From<Position> for RawPosition {
    fn from(pos: Position) -> Self {
        Self {
            row: pos.row(),
            col: pos.col(),
        }
    }
}

impl Position {
    /// Top-left corner.
    pub const TOP_LEFT: Position = Position::at(0, 0);
    /// Top edge, middle.
    pub const TOP_CENTER: Position = Position::at(0, 1);
    /// Top-right corner.
    pub const TOP_RIGHT: Position = Position::at(0, 2);
    /// Left edge, middle.
    pub const MIDDLE_LEFT: Position = Position::at(1, 0);
    /// Center square.
    pub const CENTER: Position = Position::at(1, 1);
    /// Right edge, middle.
    pub const MIDDLE_RIGHT: Position = Position::at(1, 2);
    /// Bottom-left corner.
    pub const BOTTOM_LEFT: Position = Position::at(2, 0);
    /// Bottom edge, middle.
    pub const BOTTOM_CENTER: Position = Position::at(2, 1);
    /// Bottom-right corner.
    pub const BOTTOM_RIGHT: Position = Position::at(2, 2);

    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TOP_LEFT,
        Position::TOP_CENTER,
        Position::TOP_RIGHT,
        Position::MIDDLE_LEFT,
        Position::CENTER,
        Position::MIDDLE_RIGHT,
        Position::BOTTOM_LEFT,
        Position::BOTTOM_CENTER,
        Position::BOTTOM_RIGHT,
    ];

    const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Creates a position, failing fast on coordinates outside 0-2.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row > 2 || col > 2 {
            return Err(MoveError::InvalidInput { row, col });
        }
        Ok(Self::at(row as u8, col as u8))
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self.row() * 3 + self.col()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}
