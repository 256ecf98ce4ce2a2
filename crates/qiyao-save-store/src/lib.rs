//! Qiyao race engine: save store.
//!
//! Persists saved-game documents as JSON files, one per named slot.

pub mod file_save_repository;
