//! Save repository abstraction.

use async_trait::async_trait;

use crate::error::DomainError;

/// Repository trait for storing and retrieving saved game documents by slot.
#[async_trait]
pub trait SaveRepository: Send + Sync {
    /// Stores `document` under `slot`, replacing any previous save.
    async fn store(&self, slot: &str, document: &str) -> Result<(), DomainError>;

    /// Loads the document stored under `slot`.
    ///
    /// Returns `DomainError::NotFound` when the slot has never been written.
    async fn fetch(&self, slot: &str) -> Result<String, DomainError>;

    /// Lists the slot names currently stored, sorted.
    async fn slots(&self) -> Result<Vec<String>, DomainError>;
}

/// Returns `true` if `slot` is a legal save slot name: 1 to 64 ASCII
/// alphanumerics, `-` or `_`.
#[must_use]
pub fn is_valid_slot(slot: &str) -> bool {
    !slot.is_empty()
        && slot.len() <= 64
        && slot
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
