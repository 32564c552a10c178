//! The game engine: state machine, win detection, observer notifications.

mod events;
mod game;
mod phase;
mod win;

pub use events::{EventKind, GameEvent, ObserverId, ObserverRegistry};
pub use game::{GameEngine, PIECES_PER_PLAYER};
pub use phase::Phase;
