//! Versioned read-model projection
//!
//! The projector rebuilds an immutable, `Arc`-shared snapshot only when the
//! state version moved; an unchanged version returns the cached snapshot.
//! A renderer diffs each card's `last_changed_version` against what it has
//! already drawn — that diffing lives outside the core.

use crate::SimState;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Render-oriented view of one card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSnapshot {
    pub id: u32,
    pub x: i32,
    pub y: i32,
    pub is_face_up: bool,
    pub is_matched: bool,
    /// Present only while the card is face-up
    pub pair_key: Option<u32>,
    /// State version at which this card last changed visibly
    pub last_changed_version: u32,
}

/// Immutable, versioned projection of the whole game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Cards sorted by (y, x) ascending
    pub cards: Vec<CardSnapshot>,
    pub rows: i32,
    pub columns: i32,
    pub total_cards: u32,
    pub moves: u32,
    pub matched_count: u32,
    pub is_locked: bool,
    pub is_won: bool,
    pub version: u32,
}

/// Projects [`SimState`] into cached, shareable snapshots
#[derive(Debug)]
pub struct SnapshotProjector {
    last_version: Option<u32>,
    current: Arc<GameSnapshot>,
}

impl SnapshotProjector {
    /// Create a projector with an empty snapshot
    pub fn new() -> Self {
        Self {
            last_version: None,
            current: Arc::new(GameSnapshot::default()),
        }
    }

    /// The last projected snapshot
    pub fn current(&self) -> Arc<GameSnapshot> {
        Arc::clone(&self.current)
    }

    /// Forget the cached version so the next refresh always rebuilds
    ///
    /// Needed when the state version restarts, e.g. on a new game, where
    /// the fresh version can collide with the cached one.
    pub fn invalidate(&mut self) {
        self.last_version = None;
    }

    /// Rebuild the snapshot if the state version moved
    pub fn refresh(&mut self, state: &SimState) -> Arc<GameSnapshot> {
        if self.last_version == Some(state.round.state_version) {
            return Arc::clone(&self.current);
        }

        let mut cards: Vec<CardSnapshot> = state
            .board
            .iter()
            .map(|card| {
                let is_face_up = card.is_face_up();
                CardSnapshot {
                    id: card.id.raw(),
                    x: card.position.x,
                    y: card.position.y,
                    is_face_up,
                    is_matched: card.matched,
                    pair_key: is_face_up.then(|| card.pair_key.raw()),
                    last_changed_version: card.last_changed_version,
                }
            })
            .collect();
        cards.sort_by_key(|card| (card.y, card.x));

        self.current = Arc::new(GameSnapshot {
            cards,
            rows: state.config.rows,
            columns: state.config.columns,
            total_cards: state.round.total_cards,
            moves: state.round.moves,
            matched_count: state.round.matched_count,
            is_locked: state.round.is_locked,
            is_won: state.round.is_won,
            version: state.round.state_version,
        });
        self.last_version = Some(state.round.state_version);

        Arc::clone(&self.current)
    }
}

impl Default for SnapshotProjector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Card, CardId, GridPosition, PairKey};

    fn sample_state() -> SimState {
        let mut state = SimState::new(10);
        state.config.columns = 2;
        state.config.rows = 2;
        state.round.total_cards = 4;
        // Inserted out of grid order on purpose
        for (id, x, y, key) in [(2u32, 0, 1, 1u32), (0, 0, 0, 0), (3, 1, 1, 1), (1, 1, 0, 0)] {
            state.board.insert(Card::new(
                CardId::new(id),
                GridPosition::new(x, y),
                PairKey(key),
            ));
        }
        state
    }

    #[test]
    fn test_cards_sorted_row_major() {
        let mut projector = SnapshotProjector::new();
        let snapshot = projector.refresh(&sample_state());

        let order: Vec<(i32, i32)> = snapshot.cards.iter().map(|c| (c.y, c.x)).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_pair_key_hidden_while_face_down() {
        let mut state = sample_state();
        state.board.get_mut(CardId::new(0)).unwrap().revealed = true;
        state.board.get_mut(CardId::new(3)).unwrap().matched = true;

        let mut projector = SnapshotProjector::new();
        let snapshot = projector.refresh(&state);

        let by_id = |id: u32| snapshot.cards.iter().find(|c| c.id == id).unwrap();
        assert_eq!(by_id(0).pair_key, Some(0));
        assert!(by_id(0).is_face_up);
        assert_eq!(by_id(3).pair_key, Some(1));
        assert!(by_id(3).is_matched);
        assert_eq!(by_id(1).pair_key, None);
        assert!(!by_id(1).is_face_up);
    }

    #[test]
    fn test_unchanged_version_returns_cached_snapshot() {
        let state = sample_state();
        let mut projector = SnapshotProjector::new();

        let first = projector.refresh(&state);
        let second = projector.refresh(&state);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_version_change_rebuilds() {
        let mut state = sample_state();
        let mut projector = SnapshotProjector::new();
        let first = projector.refresh(&state);

        state.board.get_mut(CardId::new(0)).unwrap().revealed = true;
        state.bump_version();
        state.mark_changed(CardId::new(0));

        let second = projector.refresh(&state);
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(second.version, 1);
        let card = second.cards.iter().find(|c| c.id == 0).unwrap();
        assert_eq!(card.last_changed_version, 1);
    }

    #[test]
    fn test_invalidate_forces_rebuild_on_same_version() {
        let state = sample_state();
        let mut projector = SnapshotProjector::new();
        let first = projector.refresh(&state);

        projector.invalidate();
        let second = projector.refresh(&state);
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
    }

    #[test]
    fn test_round_metadata_is_projected() {
        let mut state = sample_state();
        state.round.moves = 2;
        state.round.matched_count = 2;
        state.round.is_locked = true;
        state.round.state_version = 6;

        let mut projector = SnapshotProjector::new();
        let snapshot = projector.refresh(&state);
        assert_eq!(snapshot.moves, 2);
        assert_eq!(snapshot.matched_count, 2);
        assert!(snapshot.is_locked);
        assert_eq!(snapshot.version, 6);
        assert_eq!((snapshot.columns, snapshot.rows), (2, 2));
    }
}
