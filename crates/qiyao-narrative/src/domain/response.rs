//! Parsing of `|||`-delimited model output.
//!
//! Models are unreliable about structure, so every field has its own
//! fallback: a missing or blank field never discards the others.

use super::context::{
    ConflictContext, MoveContext, MoveNarrative, OpportunityContext, OpportunityNarrative,
};

const FIELD_DELIMITER: &str = "|||";

fn field(parts: &[&str], index: usize) -> Option<String> {
    parts
        .get(index)
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .map(str::to_owned)
}

/// Reads a move narration. The location name always comes from the table,
/// never from the model.
#[must_use]
pub fn parse_move(context: &MoveContext, raw: &str) -> MoveNarrative {
    let parts: Vec<&str> = raw.split(FIELD_DELIMITER).collect();
    MoveNarrative {
        location_name: context.location.name.to_owned(),
        event_text: field(&parts, 1)
            .unwrap_or_else(|| format!("Pressing on through the {}.", context.weather)),
        effect_summary: field(&parts, 2).unwrap_or_else(|| "Hard march".to_owned()),
    }
}

/// Reads a conflict narration: the whole trimmed response.
#[must_use]
pub fn parse_conflict(_context: &ConflictContext, raw: &str) -> String {
    let text = raw.trim();
    if text.is_empty() {
        "The two sects face each other.".to_owned()
    } else {
        text.to_owned()
    }
}

/// Reads an opportunity narration: title, story and arbiter notes.
#[must_use]
pub fn parse_opportunity(context: &OpportunityContext, raw: &str) -> OpportunityNarrative {
    let parts: Vec<&str> = raw.split(FIELD_DELIMITER).collect();
    let title = field(&parts, 0).unwrap_or_else(|| "Turn of Fortune".to_owned());
    let story = field(&parts, 1).unwrap_or_else(|| {
        format!(
            "Amid the {}, the winds of fate shift without warning.",
            context.weather
        )
    });
    let notes = field(&parts, 2).unwrap_or_else(|| "The arbiter rules as they see fit.".to_owned());
    OpportunityNarrative::new(title, &story, &notes)
}
