//! Qiyao race engine: factions.
//!
//! Responsible for the closed set of seven competing factions, their
//! stats, and the fixed store holding each faction's mutable record.

pub mod domain;
