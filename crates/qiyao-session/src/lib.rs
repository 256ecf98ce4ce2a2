//! Qiyao race engine: the game session.
//!
//! Responsible for the game state aggregate, the turn scheduler, encounter
//! detection, arbiter-driven interaction resolution, and the saved-game
//! document.

pub mod application;
pub mod domain;
