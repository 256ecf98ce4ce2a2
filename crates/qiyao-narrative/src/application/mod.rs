//! Narrative generators and their recovery text.

pub mod fallback;
pub mod generator;
pub mod model;
pub mod offline;
