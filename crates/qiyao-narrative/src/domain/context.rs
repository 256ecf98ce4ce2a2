//! What the narrator is told, and what it hands back.

use qiyao_faction::domain::identity::FactionId;
use qiyao_faction::domain::stats::Stats;
use qiyao_track::domain::locations::Location;
use qiyao_track::domain::weather::Weather;
use serde::Serialize;

/// Reserved separator between the story and the arbiter notes of an
/// opportunity description.
pub const NOTES_DELIMITER: &str = "|||";

/// Input for narrating an ordinary move.
#[derive(Debug, Clone, Copy)]
pub struct MoveContext {
    pub faction: FactionId,
    pub stats: Stats,
    pub location: &'static Location,
    pub day: u32,
    pub weather: Weather,
    /// Distance the arbiter asked the faction to travel.
    pub distance: i32,
}

/// Input for narrating two factions meeting on the road.
#[derive(Debug, Clone, Copy)]
pub struct ConflictContext {
    pub actor: FactionId,
    pub target: FactionId,
    pub location: &'static Location,
    pub weather: Weather,
}

/// Input for narrating a chance encounter.
#[derive(Debug, Clone, Copy)]
pub struct OpportunityContext {
    pub faction: FactionId,
    pub stats: Stats,
    pub location: &'static Location,
    pub weather: Weather,
    /// Seed premise picked from the scenario list.
    pub scenario: &'static str,
}

/// Narration of an ordinary move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveNarrative {
    pub location_name: String,
    pub event_text: String,
    /// A few words summing up the effect, for the move log.
    pub effect_summary: String,
}

/// Narration of a chance encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpportunityNarrative {
    pub title: String,
    /// Story and arbiter notes joined by [`NOTES_DELIMITER`].
    pub description: String,
}

impl OpportunityNarrative {
    /// Packs a story and its arbiter notes into one narrative.
    #[must_use]
    pub fn new(title: impl Into<String>, story: &str, notes: &str) -> Self {
        Self {
            title: title.into(),
            description: format!("{story}{NOTES_DELIMITER}{notes}"),
        }
    }
}

/// Splits a packed description into `(story, notes)`.
///
/// Only the first delimiter splits; a description without one is all story.
#[must_use]
pub fn split_notes(description: &str) -> (&str, Option<&str>) {
    match description.split_once(NOTES_DELIMITER) {
        Some((story, notes)) => (story.trim(), Some(notes.trim())),
        None => (description.trim(), None),
    }
}
