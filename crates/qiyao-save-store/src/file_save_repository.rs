//! File-backed implementation of the `SaveRepository` trait.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use qiyao_core::error::DomainError;
use qiyao_core::repository::{SaveRepository, is_valid_slot};

const EXTENSION: &str = "json";

/// Stores each slot as `<dir>/<slot>.json`.
///
/// Writes go to a sibling temporary file that is then renamed over the
/// target, so a crash mid-write never leaves a truncated save behind.
#[derive(Debug, Clone)]
pub struct FileSaveRepository {
    dir: PathBuf,
}

impl FileSaveRepository {
    /// Creates a repository rooted at `dir`. The directory is created on the
    /// first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory holding the save files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, slot: &str) -> Result<PathBuf, DomainError> {
        if is_valid_slot(slot) {
            Ok(self.dir.join(format!("{slot}.{EXTENSION}")))
        } else {
            Err(DomainError::Validation(format!("invalid save slot name: {slot:?}")))
        }
    }
}

fn infrastructure(action: &str, path: &Path, error: &io::Error) -> DomainError {
    DomainError::Infrastructure(format!("{action} {} failed: {error}", path.display()))
}

#[async_trait]
impl SaveRepository for FileSaveRepository {
    async fn store(&self, slot: &str, document: &str) -> Result<(), DomainError> {
        let path = self.slot_path(slot)?;
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| infrastructure("creating", &self.dir, &e))?;

        let tmp_path = path.with_extension(format!("{EXTENSION}.tmp"));
        fs::write(&tmp_path, document)
            .await
            .map_err(|e| infrastructure("writing", &tmp_path, &e))?;
        if let Err(e) = fs::rename(&tmp_path, &path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(infrastructure("replacing", &path, &e));
        }

        debug!(slot, path = %path.display(), bytes = document.len(), "save written");
        Ok(())
    }

    async fn fetch(&self, slot: &str) -> Result<String, DomainError> {
        let path = self.slot_path(slot)?;
        match fs::read_to_string(&path).await {
            Ok(document) => Ok(document),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(DomainError::NotFound(format!("save slot {slot}")))
            }
            Err(e) => Err(infrastructure("reading", &path, &e)),
        }
    }

    async fn slots(&self) -> Result<Vec<String>, DomainError> {
        let mut entries = match fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(infrastructure("listing", &self.dir, &e)),
        };

        let mut slots = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| infrastructure("listing", &self.dir, &e))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(EXTENSION) {
                continue;
            }
            let stem = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .filter(|stem| is_valid_slot(stem));
            if let Some(stem) = stem {
                slots.push(stem.to_owned());
            }
        }
        slots.sort();
        Ok(slots)
    }
}
