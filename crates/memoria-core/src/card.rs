//! Card entity and its component values

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for a card, assigned in post-shuffle order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value
    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card:{}", self.0)
    }
}

/// A cell on the board grid
///
/// Unique among live cards; `x` runs along columns, `y` along rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: i32,
    pub y: i32,
}

impl GridPosition {
    /// Create a new grid position
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Key shared by exactly two cards of a completed board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairKey(pub u32);

impl PairKey {
    /// Get the raw key value
    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A grid-cell tile carrying a pair key shared with exactly one sibling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Stable identifier
    pub id: CardId,
    /// Cell this card occupies
    pub position: GridPosition,
    /// Key shared with the sibling card
    pub pair_key: PairKey,
    /// Transient face-up state, cleared on mismatch
    pub revealed: bool,
    /// Permanent once set, never cleared
    pub matched: bool,
    /// State version at which this card's visible state last changed
    pub last_changed_version: u32,
}

impl Card {
    /// Create a new face-down card
    pub fn new(id: CardId, position: GridPosition, pair_key: PairKey) -> Self {
        Self {
            id,
            position,
            pair_key,
            revealed: false,
            matched: false,
            last_changed_version: 0,
        }
    }

    /// Whether the card is visibly face-up (revealed or matched)
    pub fn is_face_up(&self) -> bool {
        self.revealed || self.matched
    }
}
