//! Test repositories: `SaveRepository` doubles for tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use qiyao_core::error::DomainError;
use qiyao_core::repository::SaveRepository;

/// A save repository holding documents in memory.
#[derive(Debug, Default)]
pub struct InMemorySaveRepository {
    documents: Mutex<BTreeMap<String, String>>,
}

impl InMemorySaveRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the document stored under `slot`, if any.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn document(&self, slot: &str) -> Option<String> {
        self.documents.lock().unwrap().get(slot).cloned()
    }
}

#[async_trait]
impl SaveRepository for InMemorySaveRepository {
    async fn store(&self, slot: &str, document: &str) -> Result<(), DomainError> {
        self.documents
            .lock()
            .unwrap()
            .insert(slot.to_owned(), document.to_owned());
        Ok(())
    }

    async fn fetch(&self, slot: &str) -> Result<String, DomainError> {
        self.document(slot)
            .ok_or_else(|| DomainError::NotFound(format!("save slot {slot}")))
    }

    async fn slots(&self) -> Result<Vec<String>, DomainError> {
        Ok(self.documents.lock().unwrap().keys().cloned().collect())
    }
}

/// A save repository that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingSaveRepository;

#[async_trait]
impl SaveRepository for FailingSaveRepository {
    async fn store(&self, _slot: &str, _document: &str) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("disk full".into()))
    }

    async fn fetch(&self, _slot: &str) -> Result<String, DomainError> {
        Err(DomainError::Infrastructure("disk full".into()))
    }

    async fn slots(&self) -> Result<Vec<String>, DomainError> {
        Err(DomainError::Infrastructure("disk full".into()))
    }
}
