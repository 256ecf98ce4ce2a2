//! Shared test doubles and utilities for the Qiyao race engine.

mod clock;
mod narrator;
mod repository;
mod rng;

pub use clock::FixedClock;
pub use narrator::{FailingNarrator, NarratorCalls, ScriptedNarrator};
pub use repository::{FailingSaveRepository, InMemorySaveRepository};
pub use rng::{MockRng, SequenceRng};
