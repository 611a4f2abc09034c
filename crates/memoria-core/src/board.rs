//! Storage for the card entities of the current board

use crate::{Card, CardId, GridPosition};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Storage for all cards of the current board
///
/// Backed by an `IndexMap` so iteration order is stable, which keeps every
/// scan over the board deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cards: IndexMap<CardId, Card>,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a card, replacing any card with the same ID
    pub fn insert(&mut self, card: Card) {
        self.cards.insert(card.id, card);
    }

    /// Get a card by ID
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Get a mutable reference to a card
    pub fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(&id)
    }

    /// Find the card occupying a grid position
    pub fn card_at(&self, position: GridPosition) -> Option<&Card> {
        self.cards.values().find(|card| card.position == position)
    }

    /// Find the ID of the card occupying a grid position
    pub fn card_id_at(&self, position: GridPosition) -> Option<CardId> {
        self.card_at(position).map(|card| card.id)
    }

    /// Iterate over all cards
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Iterate over all cards mutably
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Card> {
        self.cards.values_mut()
    }

    /// Get the number of cards
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the board holds no cards
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Destroy all cards
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
