//! The 5×5 board.
//!
//! The board is a pure state container: setters do not enforce game rules
//! (that is the engine's job). Cells are stored row-major.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::CellState;
use crate::core::{PlayerColor, Position, BOARD_SIZE, CELL_COUNT};
use crate::error::Result;

/// The 5×5 grid of cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [CellState; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [CellState::Empty; CELL_COUNT],
        }
    }

    /// Get the state of the cell at a validated position.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CellState {
        self.cells[pos.index()]
    }

    /// Get the state of a cell from raw coordinates.
    ///
    /// Fails with [`crate::TeekoError::OutOfRange`] if either coordinate is
    /// outside `[0, 5)`. Use [`Board::cell`] when a [`Position`] is already
    /// in hand.
    pub fn cell_at(&self, row: u8, col: u8) -> Result<CellState> {
        Ok(self.cell(Position::new(row, col)?))
    }

    /// Set or clear the occupant of a cell.
    ///
    /// A pure state setter: it does not check whose turn it is or whether
    /// the placement is legal.
    pub fn set_occupant(&mut self, pos: Position, occupant: Option<PlayerColor>) {
        self.cells[pos.index()] = match occupant {
            Some(color) => CellState::Occupied(color),
            None => CellState::Empty,
        };
    }

    /// Mark a cell as a legal destination for the selected piece.
    ///
    /// Callers only mark vacant cells; marking replaces the cell state, so
    /// an occupant would be lost.
    pub fn mark_playable(&mut self, pos: Position) {
        self.cells[pos.index()] = CellState::Playable;
    }

    /// Clear every `Playable` mark back to `Empty`. Occupants are untouched.
    pub fn clear_transient_marks(&mut self) {
        for cell in &mut self.cells {
            if cell.is_playable() {
                *cell = CellState::Empty;
            }
        }
    }

    /// Reset every cell to `Empty`.
    pub fn reset(&mut self) {
        self.cells = [CellState::Empty; CELL_COUNT];
    }

    /// Every cell occupied by the given player, in row-major order.
    ///
    /// At most 4 positions in legal play, hence the inline capacity.
    #[must_use]
    pub fn occupied_by(&self, color: PlayerColor) -> SmallVec<[Position; 4]> {
        Position::all()
            .filter(|&pos| self.cell(pos) == CellState::Occupied(color))
            .collect()
    }

    /// Total number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_vacant()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Render the grid one row per line: `.` empty, `*` playable, `R`/`B`
    /// occupied.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(BOARD_SIZE as usize) {
            for (col, cell) in row.iter().enumerate() {
                let glyph = match cell {
                    CellState::Empty => '.',
                    CellState::Playable => '*',
                    CellState::Occupied(PlayerColor::Red) => 'R',
                    CellState::Occupied(PlayerColor::Blue) => 'B',
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
