//! Cell state.

use serde::{Deserialize, Serialize};

use crate::core::PlayerColor;

/// The state of a single board cell.
///
/// `Playable` is a transient hint: it marks an empty cell as a legal
/// destination for the currently selected piece. It is never a persisted
/// game fact — the engine clears all `Playable` marks before any other
/// mutation is considered complete.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// No piece, no mark.
    #[default]
    Empty,
    /// Occupied by one player's piece.
    Occupied(PlayerColor),
    /// Empty, and a legal destination for the selected piece.
    Playable,
}

impl CellState {
    /// Check whether the cell holds no piece (`Empty` or `Playable`).
    #[must_use]
    pub const fn is_vacant(self) -> bool {
        !matches!(self, CellState::Occupied(_))
    }

    /// Check whether the cell is marked as a legal destination.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        matches!(self, CellState::Playable)
    }

    /// Get the occupant, if any.
    #[must_use]
    pub const fn occupant(self) -> Option<PlayerColor> {
        match self {
            CellState::Occupied(color) => Some(color),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vacancy() {
        assert!(CellState::Empty.is_vacant());
        assert!(CellState::Playable.is_vacant());
        assert!(!CellState::Occupied(PlayerColor::Red).is_vacant());
    }

    #[test]
    fn test_occupant() {
        assert_eq!(CellState::Empty.occupant(), None);
        assert_eq!(CellState::Playable.occupant(), None);
        assert_eq!(
            CellState::Occupied(PlayerColor::Blue).occupant(),
            Some(PlayerColor::Blue)
        );
    }
}
