//! Faction domain types.

pub mod identity;
pub mod state;
pub mod stats;
pub mod store;
