//! Error types for memoria-core

use crate::CardId;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// A command was rejected before any mutation took place
    #[error("invalid command: {0}")]
    Validation(String),

    /// A structural invariant of the board would be violated
    ///
    /// Fatal for the operation that raised it; continuing would yield an
    /// unplayable board. The caller sees this synchronously.
    #[error("structural invariant violated: {0}")]
    StructuralInvariant(String),

    /// A card referenced by the simulation no longer exists in the store
    #[error("card not found: {0}")]
    CardNotFound(CardId),
}
