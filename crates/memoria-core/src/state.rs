//! Simulation state (board, singletons, pending evaluation)
//!
//! Singletons live as plain fields on [`SimState`] rather than queried
//! storage, so there is exactly one of each by construction. The whole
//! struct is serializable; serialize followed by deserialize reproduces
//! identical component data and singleton values.

use crate::{Board, CardId};
use serde::{Deserialize, Serialize};

/// Per-round counters and flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Completed two-card turns, not single flips
    pub moves: u32,
    /// True iff exactly two unmatched cards are revealed, or the game is won
    pub is_locked: bool,
    /// False until won, then true forever
    pub is_won: bool,
    /// Cards on the current board
    pub total_cards: u32,
    /// Always even, never decreases within a round
    pub matched_count: u32,
    /// Monotonic; bumped on every state-affecting mutation
    pub state_version: u32,
}

/// Board configuration singleton
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub columns: i32,
    pub rows: i32,
    pub seed: u64,
    /// Ticks to wait before evaluating an unresolved pair; must be > 0
    pub evaluation_delay_updates: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: 0,
            rows: 0,
            seed: 0,
            evaluation_delay_updates: 30,
        }
    }
}

/// The multi-tick hold between an unresolved second flip and its resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingEvaluation {
    /// Remaining ticks until the pair is resolved
    pub updates_left: u32,
}

/// The complete simulation state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    /// All cards of the current board
    pub board: Board,
    /// Round counters and flags
    pub round: RoundState,
    /// Board configuration
    pub config: BoardConfig,
    /// At most one pending evaluation alive at a time
    pub pending: Option<PendingEvaluation>,
}

impl SimState {
    /// Create an empty state with the given evaluation delay
    pub fn new(evaluation_delay_updates: u32) -> Self {
        Self {
            config: BoardConfig {
                evaluation_delay_updates,
                ..BoardConfig::default()
            },
            ..Self::default()
        }
    }

    /// Increment the state version
    pub fn bump_version(&mut self) {
        self.round.state_version += 1;
    }

    /// Stamp a card's last-changed version with the current state version
    pub fn mark_changed(&mut self, id: CardId) {
        let version = self.round.state_version;
        if let Some(card) = self.board.get_mut(id) {
            card.last_changed_version = version;
        }
    }

    /// Count of cards currently revealed but not yet matched
    pub fn revealed_unmatched_count(&self) -> usize {
        self.board
            .iter()
            .filter(|card| card.revealed && !card.matched)
            .count()
    }
}
