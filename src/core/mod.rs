//! Core value types: players, positions.
//!
//! These are the fundamental building blocks the board and engine are
//! built from.

pub mod player;
pub mod position;

pub use player::{PerPlayer, Player, PlayerColor};
pub use position::{Position, BOARD_SIZE, CELL_COUNT};
