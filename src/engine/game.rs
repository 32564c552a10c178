//! The game engine: phase/turn state machine and move validation.
//!
//! `select_cell` is the sole mutating entry point. The engine owns the
//! board, tracks the phase, the player to act, per-player placement counts
//! and the move-in-progress selection, and notifies observers synchronously
//! as state changes.
//!
//! Rule violations never fail: a click the rules reject (occupied cell in
//! the drop phase, a non-playable destination, the opponent's piece) is a
//! silent no-op. The only error is out-of-range coordinates, which a
//! correctly bounded presentation layer never produces.

use tracing::{debug, instrument};

use super::events::{EventKind, GameEvent, ObserverId, ObserverRegistry};
use super::phase::Phase;
use super::win;
use crate::board::Board;
use crate::core::{PerPlayer, Player, PlayerColor, Position};
use crate::error::Result;

/// Pieces each player places during the drop phase.
pub const PIECES_PER_PLAYER: u8 = 4;

/// The Teeko game engine.
pub struct GameEngine {
    board: Board,
    phase: Phase,
    players: PerPlayer<Player>,
    current: PlayerColor,
    placed: PerPlayer<u8>,
    selection: Option<Position>,
    observers: ObserverRegistry,
}

impl GameEngine {
    /// Create an engine for the given pair of players. Red acts first.
    #[must_use]
    pub fn new(players: PerPlayer<Player>) -> Self {
        Self {
            board: Board::new(),
            phase: Phase::Drop,
            players,
            current: PlayerColor::Red,
            placed: PerPlayer::with_value(0),
            selection: None,
            observers: ObserverRegistry::new(),
        }
    }

    /// Create an engine with default player names ("Red", "Blue").
    #[must_use]
    pub fn with_default_players() -> Self {
        Self::new(PerPlayer::new(Player::with_default_name))
    }

    // === Read accessors ===

    /// The board, for rendering.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The player to act.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// The color to act.
    #[must_use]
    pub fn current_color(&self) -> PlayerColor {
        self.current
    }

    /// The player owning the given color.
    #[must_use]
    pub fn player(&self, color: PlayerColor) -> &Player {
        &self.players[color]
    }

    /// How many pieces a player has placed so far (`0..=4`).
    #[must_use]
    pub fn placed_count(&self, color: PlayerColor) -> u8 {
        self.placed[color]
    }

    /// The picked-up piece during the move phase, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Position> {
        self.selection
    }

    // === Observers ===

    /// Register an observer for one event kind.
    pub fn subscribe(
        &mut self,
        kind: EventKind,
        callback: impl FnMut(&GameEvent) + 'static,
    ) -> ObserverId {
        self.observers.subscribe(kind, callback)
    }

    /// Register an observer for every event kind.
    pub fn subscribe_all(&mut self, callback: impl FnMut(&GameEvent) + 'static) -> ObserverId {
        self.observers.subscribe_all(callback)
    }

    /// Remove an observer. Returns `true` if it was registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    // === Mutating entry points ===

    /// A player selected the cell at `(row, col)`.
    ///
    /// Fails with [`crate::TeekoError::OutOfRange`] for coordinates outside
    /// the board. Every in-range selection either fully applies its effect
    /// or is a no-op.
    #[instrument(skip(self), fields(phase = %self.phase, player = %self.current))]
    pub fn select_cell(&mut self, row: u8, col: u8) -> Result<()> {
        let pos = Position::new(row, col)?;
        self.select_position(pos);
        Ok(())
    }

    /// A player selected a validated position.
    pub fn select_position(&mut self, pos: Position) {
        match self.phase {
            Phase::Drop => self.drop_at(pos),
            Phase::Move => self.move_at(pos),
        }
    }

    /// Reinitialize the session: empty board, drop phase, zero counts, no
    /// selection, Red to act.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.reset_state();
    }

    // === Drop phase ===

    fn drop_at(&mut self, pos: Position) {
        if self.placed[self.current] >= PIECES_PER_PLAYER {
            return;
        }
        if !self.board.cell(pos).is_vacant() {
            return;
        }

        self.board.set_occupant(pos, Some(self.current));
        self.placed[self.current] += 1;
        debug!(%pos, player = %self.current, "piece placed");

        if PlayerColor::both().all(|c| self.placed[c] == PIECES_PER_PLAYER) {
            self.set_phase(Phase::Move);
        }

        if win::has_won(&self.board, self.current) {
            self.declare_winner(self.current);
        } else {
            self.end_turn();
        }
    }

    // === Move phase ===

    fn move_at(&mut self, pos: Position) {
        match self.selection {
            None => {
                // Pick up one of the acting player's pieces.
                if self.board.cell(pos).occupant() == Some(self.current) {
                    self.selection = Some(pos);
                    for neighbor in pos.neighbors() {
                        if self.board.cell(neighbor).is_vacant() {
                            self.board.mark_playable(neighbor);
                        }
                    }
                    debug!(%pos, "piece selected");
                }
                // Anything else (opponent's piece, empty cell): no-op.
            }
            Some(origin) if origin == pos => {
                // Re-clicking the selected piece cancels the selection.
                self.board.clear_transient_marks();
                self.selection = None;
                debug!(%pos, "selection cancelled");
            }
            Some(origin) => {
                if !self.board.cell(pos).is_playable() {
                    return;
                }
                // Commit the move.
                self.board.clear_transient_marks();
                self.board.set_occupant(origin, None);
                self.board.set_occupant(pos, Some(self.current));
                self.selection = None;
                debug!(from = %origin, to = %pos, player = %self.current, "piece moved");

                if win::has_won(&self.board, self.current) {
                    self.declare_winner(self.current);
                } else {
                    self.end_turn();
                }
            }
        }
    }

    // === State machine internals ===

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            self.phase = phase;
            debug!(%phase, "phase changed");
            self.observers.emit(&GameEvent::PhaseChanged(phase));
        }
    }

    /// End the turn: notify observers, then hand the seat to the opponent.
    fn end_turn(&mut self) {
        self.observers.emit(&GameEvent::TurnEnded);
        self.switch_player();
    }

    fn switch_player(&mut self) {
        self.current = self.current.opponent();
    }

    /// Announce the winner, then start the next game with the other seat
    /// to act.
    fn declare_winner(&mut self, color: PlayerColor) {
        debug!(winner = %self.players[color], "game won");
        self.observers.emit(&GameEvent::Winner(color));
        self.reset_state();
        self.switch_player();
    }

    fn reset_state(&mut self) {
        self.board.reset();
        self.phase = Phase::Drop;
        self.placed = PerPlayer::with_value(0);
        self.selection = None;
        self.current = PlayerColor::Red;
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::with_default_players()
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("phase", &self.phase)
            .field("current", &self.current)
            .field("placed", &self.placed)
            .field("selection", &self.selection)
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}
