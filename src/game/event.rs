//! Event System
//!
//! The simulation reports what happened during a step through typed queues
//! instead of calling into audio, logging or the renderer directly. The app
//! drains them after each frame.
//!
//! Example flow:
//! 1. Enemy touches the player -> `DamageEvent`
//! 2. Player's health drops to zero -> `StateChangeEvent { to: Lose }`
//! 3. App drains both: logs the hit, switches to the lose screen

use macroquad::prelude::Vec2;
use super::state::GameState;

/// A queue for events of a single type.
/// Events are collected during the frame and drained at specific points.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Iterate over events without clearing
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clear all events without processing
    #[cfg(test)]
    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Container for all game events.
#[derive(Debug, Default)]
pub struct Events {
    /// An enemy hurt the player
    pub damage: EventQueue<DamageEvent>,

    /// A coin was picked up
    pub coin_collected: EventQueue<CoinEvent>,

    /// The game state machine moved
    pub state_changed: EventQueue<StateChangeEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all event queues.
    #[cfg(test)]
    pub fn clear_all(&mut self) {
        self.damage.clear();
        self.coin_collected.clear();
        self.state_changed.clear();
    }
}

// =============================================================================
// Event Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageEvent {
    /// Index into the level's enemy list
    pub enemy: usize,
    pub amount: f32,
    pub health_after: f32,
    /// Wall-clock time of the hit
    pub at: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoinEvent {
    /// Index into the level's coin list
    pub coin: usize,
    pub position: Vec2,
    pub score_after: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChangeEvent {
    pub from: GameState,
    pub to: GameState,
}
