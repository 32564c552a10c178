//! Board coordinates.
//!
//! ## Position
//!
//! A bounds-checked `(row, col)` pair on the 5×5 board. Construction from
//! raw coordinates is fallible; holding a `Position` is proof the
//! coordinates are in range, so board accessors taking a `Position` never
//! need to re-check.
//!
//! Positions order row-major (`(0,0) < (0,1) < ... < (4,4)`), which is the
//! order win detection scans occupied cells in.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TeekoError};

/// Side length of the board.
pub const BOARD_SIZE: u8 = 5;

/// Total number of cells.
pub const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// A validated position on the 5×5 board.
///
/// Ordering is row-major: positions compare by row first, then column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Create a position from raw coordinates.
    ///
    /// Fails with [`TeekoError::OutOfRange`] if either coordinate is
    /// outside `[0, 5)`.
    pub fn new(row: u8, col: u8) -> Result<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self { row, col })
        } else {
            Err(TeekoError::OutOfRange { row, col })
        }
    }

    /// Create a position from a row-major cell index (`0..25`).
    pub fn from_index(index: usize) -> Result<Self> {
        if index < CELL_COUNT {
            Ok(Self {
                row: (index / BOARD_SIZE as usize) as u8,
                col: (index % BOARD_SIZE as usize) as u8,
            })
        } else {
            Err(TeekoError::OutOfRange {
                row: (index / BOARD_SIZE as usize).min(u8::MAX as usize) as u8,
                col: (index % BOARD_SIZE as usize) as u8,
            })
        }
    }

    /// Get the row (`0..5`).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Get the column (`0..5`).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Get the row-major cell index (`row * 5 + col`).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// Check king-move adjacency: both coordinates differ by at most 1 and
    /// the positions are distinct (Chebyshev distance exactly 1).
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        self != other
            && self.row.abs_diff(other.row) <= 1
            && self.col.abs_diff(other.col) <= 1
    }

    /// Iterate over the king-move neighbors of this position, in row-major
    /// order. Between 3 (corner) and 8 (interior) positions.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        Self::all().filter(move |&p| self.is_adjacent(p))
    }

    /// Iterate over all 25 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
