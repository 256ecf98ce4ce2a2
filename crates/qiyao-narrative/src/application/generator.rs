//! The narrative generator seam.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::context::{
    ConflictContext, MoveContext, MoveNarrative, OpportunityContext, OpportunityNarrative,
};

/// Why a narrative could not be produced.
///
/// Never surfaced to the arbiter: callers substitute
/// [`fallback`](super::fallback) text and log a warning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NarrativeError {
    /// No model is reachable or configured.
    #[error("narrative model unavailable")]
    Unavailable,

    /// The model did not answer in time.
    #[error("narrative model timed out")]
    Timeout,

    /// The model answered with an error.
    #[error("narrative model error: {0}")]
    Model(String),
}

/// Produces flavour text for the three kinds of turn outcome.
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    /// Narrates an ordinary move.
    async fn describe_move(&self, context: MoveContext) -> Result<MoveNarrative, NarrativeError>;

    /// Narrates two factions meeting at the same waypoint.
    async fn describe_conflict(&self, context: ConflictContext) -> Result<String, NarrativeError>;

    /// Narrates a chance encounter.
    async fn describe_opportunity(
        &self,
        context: OpportunityContext,
    ) -> Result<OpportunityNarrative, NarrativeError>;
}
