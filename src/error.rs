//! Error types for the Teeko engine.
//!
//! The taxonomy is deliberately narrow: the only error class is a caller
//! handing in coordinates outside the 5×5 grid, which is a contract
//! violation rather than a game event. Rule violations (occupied cell,
//! non-adjacent destination, opponent's piece) are silent no-ops, not
//! errors — the presentation layer is expected to offer only legal
//! choices, and the engine rejects the rest without failing.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeekoError {
    #[error("position ({row}, {col}) is outside the 5x5 board")]
    OutOfRange { row: u8, col: u8 },
}

pub type Result<T> = std::result::Result<T, TeekoError>;
