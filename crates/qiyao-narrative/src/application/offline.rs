//! Narrator used when no text model is configured.

use async_trait::async_trait;

use super::generator::{NarrativeError, NarrativeGenerator};
use crate::domain::context::{
    ConflictContext, MoveContext, MoveNarrative, OpportunityContext, OpportunityNarrative,
};

/// Returns fixed text for every request. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineNarrator;

#[async_trait]
impl NarrativeGenerator for OfflineNarrator {
    async fn describe_move(&self, context: MoveContext) -> Result<MoveNarrative, NarrativeError> {
        Ok(MoveNarrative {
            location_name: context.location.name.to_owned(),
            event_text: "Mist shrouds the road; the heavens keep their secrets.".to_owned(),
            effect_summary: "Nothing stirs".to_owned(),
        })
    }

    async fn describe_conflict(&self, _context: ConflictContext) -> Result<String, NarrativeError> {
        Ok("Paths cross on a narrow road; blades are half drawn.".to_owned())
    }

    async fn describe_opportunity(
        &self,
        _context: OpportunityContext,
    ) -> Result<OpportunityNarrative, NarrativeError> {
        Ok(OpportunityNarrative::new(
            "A Wanderer's Chance",
            "A hidden cave opens in the hillside.",
            "Suggestion: let them explore if martial exceeds 30.",
        ))
    }
}
