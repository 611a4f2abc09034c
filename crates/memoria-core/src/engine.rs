//! Game façade and the per-tick pipeline
//!
//! A single logical thread owns the state and advances it one discrete
//! tick at a time: drain deferred commands, run the evaluation driver,
//! check the win condition, refresh the snapshot. The only externally
//! visible concurrency is event delivery through [`EventQueue`].

use crate::command::CommandQueue;
use crate::error::Result;
use crate::{
    evaluate, win, CommandOutcome, EventQueue, GameCommand, GameSnapshot, SimState,
    SnapshotProjector,
};
use std::sync::Arc;

/// Knobs supplied by the embedding application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Ticks to wait before evaluating an unresolved pair; must be > 0
    pub evaluation_delay_updates: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            evaluation_delay_updates: 30,
        }
    }
}

/// The memory game simulation core
pub struct GameCore {
    state: SimState,
    commands: CommandQueue,
    projector: SnapshotProjector,
    events: Arc<EventQueue>,
}

impl GameCore {
    /// Create a core with no board; start a game to deal cards
    pub fn new(config: GameConfig) -> Self {
        Self::from_state(SimState::new(config.evaluation_delay_updates))
    }

    /// Restore a core from previously serialized state
    ///
    /// The state round-trips through serde unchanged, so a game saved
    /// mid-turn resumes with the same board, counters, and countdown.
    pub fn from_state(state: SimState) -> Self {
        let mut projector = SnapshotProjector::new();
        projector.refresh(&state);
        Self {
            state,
            commands: CommandQueue::new(),
            projector,
            events: Arc::new(EventQueue::new()),
        }
    }

    /// Start a new game (immediate command)
    ///
    /// On success the fresh board is already visible to [`snapshot`] in
    /// the same step. A structural invariant violation surfaces here
    /// synchronously; plain validation failures come back as
    /// [`CommandOutcome::Failed`].
    ///
    /// [`snapshot`]: GameCore::snapshot
    pub fn start_new_game(&mut self, columns: i32, rows: i32, seed: u64) -> Result<CommandOutcome> {
        let outcome = self.commands.submit(
            GameCommand::StartNewGame {
                columns,
                rows,
                seed,
            },
            &mut self.state,
        )?;

        if outcome == CommandOutcome::Success {
            // The version restarts on a new game and may collide with the
            // cached one, so the rebuild must be forced.
            self.projector.invalidate();
            self.projector.refresh(&self.state);
        }
        Ok(outcome)
    }

    /// Queue a flip for the next tick (deferred command)
    pub fn flip_card_at(&mut self, x: i32, y: i32) -> CommandOutcome {
        match self
            .commands
            .submit(GameCommand::FlipCardAt { x, y }, &mut self.state)
        {
            Ok(outcome) => outcome,
            Err(err) => {
                log::error!("flip submission failed: {err}");
                CommandOutcome::Failed
            }
        }
    }

    /// Advance the simulation by one tick
    ///
    /// `delta_time` is accepted for interface compatibility and ignored;
    /// the evaluation delay is purely tick-counted. The whole pipeline
    /// completes before this returns. Events are not delivered here —
    /// drain them from [`GameCore::events`] afterwards.
    pub fn advance(&mut self, _delta_time: f32) {
        self.commands.drain(&mut self.state);

        if let Err(err) = evaluate::run(&mut self.state) {
            log::error!("match evaluation failed: {err}");
        }
        win::run(&mut self.state, &self.events);

        self.projector.refresh(&self.state);
    }

    /// The current read-model
    pub fn snapshot(&self) -> Arc<GameSnapshot> {
        self.projector.current()
    }

    /// Whether anything changed since the given snapshot version
    pub fn has_changed_since(&self, version: u32) -> bool {
        self.projector.current().version != version
    }

    /// Handle to the event queue for external draining
    pub fn events(&self) -> Arc<EventQueue> {
        Arc::clone(&self.events)
    }

    /// The full simulation state, e.g. for serialization by the embedder
    pub fn state(&self) -> &SimState {
        &self.state
    }
}

impl Default for GameCore {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
