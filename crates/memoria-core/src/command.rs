//! Command intake, validation, and the per-tick drain loop
//!
//! Every command passes one validate-then-dispatch gate. Starting a new
//! game is immediate so the caller can read the resulting snapshot in the
//! same step; flips are queued FIFO and drained once per tick before the
//! evaluation, win, and snapshot systems run.

use crate::error::{Error, Result};
use crate::{flip, setup, GridPosition, SimState};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Largest board side accepted by validation
const MAX_BOARD_DIMENSION: i32 = 10;

/// A player command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameCommand {
    /// Rebuild the board and reset the round (immediate)
    StartNewGame { columns: i32, rows: i32, seed: u64 },
    /// Flip the card at a grid cell (deferred to the next tick)
    FlipCardAt { x: i32, y: i32 },
}

impl GameCommand {
    /// Whether the command executes synchronously at submit time
    pub fn is_immediate(&self) -> bool {
        matches!(self, GameCommand::StartNewGame { .. })
    }
}

/// Result of command processing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandOutcome {
    /// Executed and mutated state
    Success,
    /// Rejected by validation or failed during execution
    Failed,
    /// Well-formed but currently inapplicable; nothing was mutated
    Skipped,
    /// Accepted and queued for the next tick
    Deferred,
}

/// FIFO intake queue with a single validate-then-dispatch gate
#[derive(Debug, Default)]
pub(crate) struct CommandQueue {
    buffer: VecDeque<GameCommand>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a command, then execute it now or enqueue it
    ///
    /// Validation failures are rejected with no mutation and reported as
    /// [`CommandOutcome::Failed`]. Only immediate commands can surface an
    /// `Err` here; a structural violation aborts nothing but the command
    /// itself and reaches the caller synchronously.
    pub fn submit(&mut self, command: GameCommand, state: &mut SimState) -> Result<CommandOutcome> {
        if let Err(err) = validate(&command) {
            log::warn!("command validation failed: {err}");
            return Ok(CommandOutcome::Failed);
        }

        if command.is_immediate() {
            return execute(&command, state);
        }

        self.buffer.push_back(command);
        Ok(CommandOutcome::Deferred)
    }

    /// Execute every queued command in submission order
    ///
    /// A fault in one already-validated command is logged and does not
    /// abort the remaining commands; state applied earlier in the tick
    /// stays applied.
    pub fn drain(&mut self, state: &mut SimState) {
        while let Some(command) = self.buffer.pop_front() {
            match execute(&command, state) {
                Ok(outcome) => log::debug!("executed {command:?}: {outcome:?}"),
                Err(err) => log::error!("command {command:?} failed: {err}"),
            }
        }
    }

    #[cfg(test)]
    pub fn pending_len(&self) -> usize {
        self.buffer.len()
    }
}

/// Check a command's arguments before any mutation
fn validate(command: &GameCommand) -> Result<()> {
    match *command {
        GameCommand::StartNewGame { columns, rows, .. } => {
            if !(1..=MAX_BOARD_DIMENSION).contains(&columns)
                || !(1..=MAX_BOARD_DIMENSION).contains(&rows)
            {
                return Err(Error::Validation(format!(
                    "board dimensions out of range: {columns}x{rows}"
                )));
            }
            if (columns * rows) % 2 != 0 {
                return Err(Error::Validation(format!(
                    "board size must be even: {columns}x{rows}"
                )));
            }
            Ok(())
        }
        GameCommand::FlipCardAt { x, y } => {
            if !(0..=MAX_BOARD_DIMENSION).contains(&x) || !(0..=MAX_BOARD_DIMENSION).contains(&y) {
                return Err(Error::Validation(format!(
                    "flip position out of range: ({x}, {y})"
                )));
            }
            Ok(())
        }
    }
}

/// Execute an already-validated command against the simulation state
fn execute(command: &GameCommand, state: &mut SimState) -> Result<CommandOutcome> {
    match *command {
        GameCommand::StartNewGame { columns, rows, seed } => {
            state.config.columns = columns;
            state.config.rows = rows;
            state.config.seed = seed;
            setup::build_board(state)?;
            Ok(CommandOutcome::Success)
        }
        GameCommand::FlipCardAt { x, y } => flip::try_flip(state, GridPosition::new(x, y)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CardId;

    #[test]
    fn test_start_new_game_is_immediate() {
        let mut queue = CommandQueue::new();
        let mut state = SimState::new(10);

        let outcome = queue
            .submit(
                GameCommand::StartNewGame {
                    columns: 2,
                    rows: 2,
                    seed: 5,
                },
                &mut state,
            )
            .unwrap();

        assert_eq!(outcome, CommandOutcome::Success);
        assert_eq!(queue.pending_len(), 0);
        assert_eq!(state.board.len(), 4);
    }

    #[test]
    fn test_odd_board_is_rejected_without_mutation() {
        let mut queue = CommandQueue::new();
        let mut state = SimState::new(10);
        queue
            .submit(
                GameCommand::StartNewGame {
                    columns: 2,
                    rows: 2,
                    seed: 5,
                },
                &mut state,
            )
            .unwrap();
        let before = state.clone();

        // Scenario C: 3x1 has an odd total
        let outcome = queue
            .submit(
                GameCommand::StartNewGame {
                    columns: 3,
                    rows: 1,
                    seed: 5,
                },
                &mut state,
            )
            .unwrap();

        assert_eq!(outcome, CommandOutcome::Failed);
        assert_eq!(state, before);
    }

    #[test]
    fn test_dimension_range_is_enforced() {
        let mut queue = CommandQueue::new();
        let mut state = SimState::new(10);

        for (columns, rows) in [(0, 4), (11, 2), (2, 0), (4, 11)] {
            let outcome = queue
                .submit(
                    GameCommand::StartNewGame {
                        columns,
                        rows,
                        seed: 0,
                    },
                    &mut state,
                )
                .unwrap();
            assert_eq!(outcome, CommandOutcome::Failed);
        }
        assert!(state.board.is_empty());
    }

    #[test]
    fn test_flip_out_of_range_is_rejected() {
        let mut queue = CommandQueue::new();
        let mut state = SimState::new(10);

        for (x, y) in [(-1, 0), (0, -1), (11, 0), (0, 11)] {
            let outcome = queue
                .submit(GameCommand::FlipCardAt { x, y }, &mut state)
                .unwrap();
            assert_eq!(outcome, CommandOutcome::Failed);
        }
        assert_eq!(queue.pending_len(), 0);
    }

    #[test]
    fn test_flip_is_deferred_until_drain() {
        let mut queue = CommandQueue::new();
        let mut state = SimState::new(10);
        queue
            .submit(
                GameCommand::StartNewGame {
                    columns: 2,
                    rows: 2,
                    seed: 1,
                },
                &mut state,
            )
            .unwrap();

        let outcome = queue
            .submit(GameCommand::FlipCardAt { x: 0, y: 0 }, &mut state)
            .unwrap();
        assert_eq!(outcome, CommandOutcome::Deferred);
        assert_eq!(queue.pending_len(), 1);
        assert!(!state.board.get(CardId::new(0)).unwrap().revealed);

        queue.drain(&mut state);
        assert_eq!(queue.pending_len(), 0);
        assert!(state
            .board
            .card_at(crate::GridPosition::new(0, 0))
            .unwrap()
            .revealed);
    }

    #[test]
    fn test_flip_on_missing_card_drains_as_noop() {
        let mut queue = CommandQueue::new();
        let mut state = SimState::new(10);
        queue
            .submit(
                GameCommand::StartNewGame {
                    columns: 2,
                    rows: 2,
                    seed: 1,
                },
                &mut state,
            )
            .unwrap();

        // (9, 9) is in validation range but holds no card
        queue
            .submit(GameCommand::FlipCardAt { x: 9, y: 9 }, &mut state)
            .unwrap();
        queue.drain(&mut state);

        assert_eq!(state.round.state_version, 0);
    }
}
