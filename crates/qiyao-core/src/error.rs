//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A persisted document is malformed or missing required fields.
    #[error("format error: {0}")]
    Format(String),

    /// The command is not valid in the current phase of the game.
    #[error("validation error: {0}")]
    Validation(String),

    /// Another turn-advancing operation is still in flight.
    #[error("another turn is already in flight")]
    TurnInFlight,

    /// A named resource (e.g. a save slot) does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
