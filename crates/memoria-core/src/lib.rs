//! Memoria Core - Deterministic simulation core for a memory matching game
//!
//! This crate provides the tick-advanced engine behind the game:
//! - Card entities in a stable-order store
//! - Seeded, reproducible board construction
//! - Command intake with validation and per-tick draining
//! - The flip state machine and timed match evaluation
//! - Win detection and a versioned, diffable snapshot projection
//! - A thread-safe event queue drained by the embedder
//!
//! ## Determinism
//!
//! The same seed and dimensions always deal the same board, and a tick
//! always performs the same pipeline: drain commands, evaluate, check the
//! win condition, refresh the snapshot. Rendering, persistence formats,
//! and scene wiring live outside this crate; the state only promises to
//! round-trip through serde unchanged.

mod board;
mod card;
mod command;
mod engine;
mod error;
mod evaluate;
mod events;
mod flip;
mod rng;
mod setup;
mod snapshot;
mod state;
mod win;

pub use board::Board;
pub use card::{Card, CardId, GridPosition, PairKey};
pub use command::{CommandOutcome, GameCommand};
pub use engine::{GameConfig, GameCore};
pub use error::{Error, Result};
pub use events::{EventQueue, GameEvent};
pub use rng::GameRng;
pub use snapshot::{CardSnapshot, GameSnapshot, SnapshotProjector};
pub use state::{BoardConfig, PendingEvaluation, RoundState, SimState};
