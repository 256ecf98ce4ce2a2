//! Track domain types.

pub mod locations;
pub mod path;
pub mod weather;
