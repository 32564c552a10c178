//! Engine notifications and the observer registry.
//!
//! The engine announces what happened — phase changed, turn ended, a player
//! won — and a presentation layer subscribes to re-render. Dispatch is
//! synchronous: callbacks run inside the `select_cell` call that produced
//! the event, in registration order.
//!
//! The registry stores observers keyed by id with a by-kind index for
//! lookup, so an observer can listen to a single event kind or to all of
//! them.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::phase::Phase;
use crate::core::PlayerColor;

/// A notification emitted by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The phase changed (fires once per game, on Drop → Move).
    PhaseChanged(Phase),
    /// A turn completed without a winner; the other player is now to act.
    TurnEnded,
    /// A player completed a winning pattern. The board resets right after
    /// this fires.
    Winner(PlayerColor),
}

impl GameEvent {
    /// The data-free discriminant, used for subscription.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            GameEvent::PhaseChanged(_) => EventKind::PhaseChanged,
            GameEvent::TurnEnded => EventKind::TurnEnded,
            GameEvent::Winner(_) => EventKind::Winner,
        }
    }
}

/// The kinds of event an observer can subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    PhaseChanged,
    TurnEnded,
    Winner,
}

impl EventKind {
    /// All event kinds.
    pub const ALL: [EventKind; 3] = [
        EventKind::PhaseChanged,
        EventKind::TurnEnded,
        EventKind::Winner,
    ];
}

/// Unique identifier for a registered observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObserverId(pub u32);

impl ObserverId {
    /// Create a new observer ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ObserverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Observer({})", self.0)
    }
}

type ObserverFn = Box<dyn FnMut(&GameEvent)>;

/// Registry of engine observers.
///
/// Observers are invoked synchronously in registration order. Each observer
/// subscribes to one or more event kinds.
#[derive(Default)]
pub struct ObserverRegistry {
    /// All registered callbacks.
    observers: FxHashMap<ObserverId, ObserverFn>,

    /// Index by event kind, in registration order.
    by_kind: FxHashMap<EventKind, Vec<ObserverId>>,

    /// Next observer ID to allocate.
    next_id: u32,
}

impl ObserverRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer for a single event kind, returns its ID.
    pub fn subscribe(
        &mut self,
        kind: EventKind,
        callback: impl FnMut(&GameEvent) + 'static,
    ) -> ObserverId {
        self.subscribe_kinds(&[kind], callback)
    }

    /// Register an observer for every event kind, returns its ID.
    pub fn subscribe_all(&mut self, callback: impl FnMut(&GameEvent) + 'static) -> ObserverId {
        self.subscribe_kinds(&EventKind::ALL, callback)
    }

    /// Register an observer for a set of event kinds, returns its ID.
    pub fn subscribe_kinds(
        &mut self,
        kinds: &[EventKind],
        callback: impl FnMut(&GameEvent) + 'static,
    ) -> ObserverId {
        let id = ObserverId::new(self.next_id);
        self.next_id += 1;

        for &kind in kinds {
            let list = self.by_kind.entry(kind).or_default();
            if !list.contains(&id) {
                list.push(id);
            }
        }

        self.observers.insert(id, Box::new(callback));
        id
    }

    /// Remove an observer. Returns `true` if it was registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        if self.observers.remove(&id).is_none() {
            return false;
        }
        for list in self.by_kind.values_mut() {
            list.retain(|&oid| oid != id);
        }
        true
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Check whether no observers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Deliver an event to every observer subscribed to its kind, in
    /// registration order.
    pub fn emit(&mut self, event: &GameEvent) {
        let Some(ids) = self.by_kind.get(&event.kind()) else {
            return;
        };
        for id in ids {
            if let Some(callback) = self.observers.get_mut(id) {
                callback(event);
            }
        }
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
