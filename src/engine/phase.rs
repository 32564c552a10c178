//! Game phases.

use serde::{Deserialize, Serialize};

/// The two stages of a Teeko game.
///
/// `Drop` is the opening stage where each player places their 4 pieces;
/// once all 8 are on the board the game enters `Move` and stays there until
/// a reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Drop,
    Move,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Drop => write!(f, "drop"),
            Phase::Move => write!(f, "move"),
        }
    }
}
