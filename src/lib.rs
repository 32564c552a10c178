//! # teeko-engine
//!
//! A game engine for Teeko, the two-player abstract strategy game on a 5×5
//! grid: each player drops 4 pieces, then slides them to adjacent cells,
//! racing to complete a row, column, diagonal, or 2×2 square of 4.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: board state, the phase/turn state machine,
//!    legal-move validation and win detection. Rendering, window chrome and
//!    input routing belong to a presentation layer that calls
//!    [`GameEngine::select_cell`] and subscribes to notifications.
//!
//! 2. **Rule violations are no-ops, not errors**: the engine defensively
//!    ignores illegal selections instead of failing. The single error class
//!    is out-of-range coordinates from an incorrectly bounded caller.
//!
//! 3. **Synchronous and single-threaded**: every selection runs to
//!    completion, observer callbacks included, before control returns.
//!
//! ## Modules
//!
//! - `core`: player identities, per-player storage, board positions
//! - `board`: the 5×5 grid of cell states
//! - `engine`: the state machine, win detection, observer registry
//! - `error`: the error taxonomy
//!
//! ## Example
//!
//! ```
//! use teeko_engine::{EventKind, GameEngine, Phase, PlayerColor};
//!
//! let mut engine = GameEngine::with_default_players();
//! engine.subscribe(EventKind::Winner, |event| {
//!     println!("game over: {:?}", event);
//! });
//!
//! // Red and Blue alternate placements during the drop phase.
//! engine.select_cell(2, 2)?;
//! assert_eq!(engine.phase(), Phase::Drop);
//! assert_eq!(engine.current_color(), PlayerColor::Blue);
//! # Ok::<(), teeko_engine::TeekoError>(())
//! ```

pub mod board;
pub mod core;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use crate::board::{Board, CellState};
pub use crate::core::{PerPlayer, Player, PlayerColor, Position, BOARD_SIZE, CELL_COUNT};
pub use crate::engine::{
    EventKind, GameEngine, GameEvent, ObserverId, ObserverRegistry, Phase, PIECES_PER_PLAYER,
};
pub use crate::error::{Result, TeekoError};
