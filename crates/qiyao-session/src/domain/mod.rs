//! Session domain types and rules.

pub mod commands;
pub mod commit;
pub mod document;
pub mod encounter;
pub mod input;
pub mod interaction;
pub mod log;
pub mod resolution;
pub mod session;
pub mod state;
