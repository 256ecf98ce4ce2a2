//! Narrative domain types.

pub mod context;
pub mod prompts;
pub mod response;
pub mod scenarios;
