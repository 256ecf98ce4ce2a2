//! The global race log.

use serde::{Deserialize, Serialize};

/// What kind of turn produced a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogCategory {
    /// A plain move or a consumed skip.
    Move,
    /// A resolved meeting between two factions.
    Conflict,
    /// A resolved chance encounter.
    Event,
    /// Bookkeeping such as the opening of the race.
    System,
}

/// One line of the global log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub day: u32,
    pub category: LogCategory,
    pub text: String,
}

impl LogEntry {
    #[must_use]
    pub fn new(day: u32, category: LogCategory, text: impl Into<String>) -> Self {
        Self {
            day,
            category,
            text: text.into(),
        }
    }
}
