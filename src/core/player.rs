//! Player identities and per-player data storage.
//!
//! ## PlayerColor
//!
//! Lightweight `Copy` identity for the two sides. This is what cells and
//! counters store.
//!
//! ## Player
//!
//! A full player: color plus display name. Exactly two instances exist for
//! the lifetime of a game session; they are immutable after construction
//! and handed to the engine at startup rather than living as process-wide
//! singletons.
//!
//! ## PerPlayer
//!
//! Fixed two-slot per-player storage indexed by `PlayerColor`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Red,
    Blue,
}

impl PlayerColor {
    /// Get the opposing side.
    #[must_use]
    pub const fn opponent(self) -> PlayerColor {
        match self {
            PlayerColor::Red => PlayerColor::Blue,
            PlayerColor::Blue => PlayerColor::Red,
        }
    }

    /// Slot index for per-player storage (Red = 0, Blue = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerColor::Red => 0,
            PlayerColor::Blue => 1,
        }
    }

    /// Iterate over both colors, Red first.
    pub fn both() -> impl Iterator<Item = PlayerColor> {
        [PlayerColor::Red, PlayerColor::Blue].into_iter()
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerColor::Red => write!(f, "Red"),
            PlayerColor::Blue => write!(f, "Blue"),
        }
    }
}

/// A player: color identity plus display name.
///
/// Immutable after construction. The engine holds one per color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    color: PlayerColor,
    name: String,
}

impl Player {
    /// Create a player with a display name.
    pub fn new(color: PlayerColor, name: impl Into<String>) -> Self {
        Self {
            color,
            name: name.into(),
        }
    }

    /// Create a player whose display name is the color name.
    #[must_use]
    pub fn with_default_name(color: PlayerColor) -> Self {
        Self::new(color, color.to_string())
    }

    /// Get the player's color.
    #[must_use]
    pub const fn color(&self) -> PlayerColor {
        self.color
    }

    /// Get the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Per-player data storage with O(1) access, indexed by [`PlayerColor`].
///
/// ## Example
///
/// ```
/// use teeko_engine::core::{PerPlayer, PlayerColor};
///
/// let mut placed: PerPlayer<u8> = PerPlayer::with_value(0);
/// placed[PlayerColor::Red] += 1;
/// assert_eq!(placed[PlayerColor::Red], 1);
/// assert_eq!(placed[PlayerColor::Blue], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PerPlayer<T> {
    data: [T; 2],
}

impl<T> PerPlayer<T> {
    /// Create with values from a factory function, called Red first.
    pub fn new(factory: impl Fn(PlayerColor) -> T) -> Self {
        Self {
            data: [factory(PlayerColor::Red), factory(PlayerColor::Blue)],
        }
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to one player's data.
    #[must_use]
    pub fn get(&self, color: PlayerColor) -> &T {
        &self.data[color.index()]
    }

    /// Get a mutable reference to one player's data.
    pub fn get_mut(&mut self, color: PlayerColor) -> &mut T {
        &mut self.data[color.index()]
    }

    /// Iterate over `(PlayerColor, &T)` pairs, Red first.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerColor, &T)> {
        PlayerColor::both().zip(self.data.iter())
    }
}

impl<T> Index<PlayerColor> for PerPlayer<T> {
    type Output = T;

    fn index(&self, color: PlayerColor) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<PlayerColor> for PerPlayer<T> {
    fn index_mut(&mut self, color: PlayerColor) -> &mut Self::Output {
        self.get_mut(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(PlayerColor::Red.opponent(), PlayerColor::Blue);
        assert_eq!(PlayerColor::Blue.opponent(), PlayerColor::Red);
    }

    #[test]
    fn test_player_names() {
        let red = Player::with_default_name(PlayerColor::Red);
        assert_eq!(red.name(), "Red");
        assert_eq!(red.color(), PlayerColor::Red);

        let blue = Player::new(PlayerColor::Blue, "Azul");
        assert_eq!(blue.name(), "Azul");
        assert_eq!(format!("{}", blue), "Azul");
    }

    #[test]
    fn test_per_player_factory() {
        let map: PerPlayer<usize> = PerPlayer::new(|c| c.index() * 10);
        assert_eq!(map[PlayerColor::Red], 0);
        assert_eq!(map[PlayerColor::Blue], 10);
    }

    #[test]
    fn test_per_player_mutation() {
        let mut map: PerPlayer<u8> = PerPlayer::with_value(0);
        map[PlayerColor::Blue] = 4;
        assert_eq!(map[PlayerColor::Red], 0);
        assert_eq!(map[PlayerColor::Blue], 4);
    }

    #[test]
    fn test_per_player_iter() {
        let map: PerPlayer<u8> = PerPlayer::new(|c| c.index() as u8);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerColor::Red, &0), (PlayerColor::Blue, &1)]);
    }

    #[test]
    fn test_serde_roundtrip() {
        let map: PerPlayer<u8> = PerPlayer::new(|c| c.index() as u8 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let back: PerPlayer<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }
}
