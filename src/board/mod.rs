//! Board state: the 5×5 grid and its cell states.
//!
//! The board is a leaf component — a pure state container with accessors
//! and setters. Game rules live in [`crate::engine`].

mod cell;
mod grid;

pub use cell::CellState;
pub use grid::Board;
