//! Recovery text used when a narrator fails.

use crate::domain::context::{
    ConflictContext, MoveContext, MoveNarrative, OpportunityContext, OpportunityNarrative,
};

/// Move narration when the narrator failed.
#[must_use]
pub fn move_narrative(context: &MoveContext) -> MoveNarrative {
    MoveNarrative {
        location_name: context.location.name.to_owned(),
        event_text: format!("The road goes on under the {}.", context.weather),
        effect_summary: "Onward".to_owned(),
    }
}

/// Conflict narration when the narrator failed.
#[must_use]
pub fn conflict_narrative(context: &ConflictContext) -> String {
    format!(
        "{} and {} stand off at {}.",
        context.actor.name(),
        context.target.name(),
        context.location.name
    )
}

/// Opportunity narration when the narrator failed.
#[must_use]
pub fn opportunity_narrative(_context: &OpportunityContext) -> OpportunityNarrative {
    OpportunityNarrative::new(
        "Unknown Fortune",
        "The scene is hazy.",
        "The arbiter rules as they see fit.",
    )
}
