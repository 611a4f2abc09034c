//! Domain events and their delivery queue
//!
//! The simulation appends events during a tick; the embedder drains them at
//! a well-defined point after each tick, possibly from another thread.
//! Nothing is delivered from inside the tick itself.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

/// A domain event emitted by the simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// All cards have been matched; fired exactly once per game
    GameWon {
        moves: u32,
        total_cards: u32,
        state_version: u32,
    },
}

/// Thread-safe FIFO queue for deferred event delivery
#[derive(Debug, Default)]
pub struct EventQueue {
    inner: Mutex<VecDeque<GameEvent>>,
}

impl EventQueue {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event for later delivery
    pub fn push(&self, event: GameEvent) {
        self.lock().push_back(event);
    }

    /// Remove and return all queued events in emission order
    pub fn drain(&self) -> Vec<GameEvent> {
        self.lock().drain(..).collect()
    }

    /// Number of undelivered events
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<GameEvent>> {
        // A poisoned lock only means another thread panicked mid-drain;
        // the queue itself is still a valid VecDeque.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
