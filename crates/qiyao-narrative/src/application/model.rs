//! Narrator backed by a text model.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::timeout;
use tracing::debug;

use super::generator::{NarrativeError, NarrativeGenerator};
use crate::domain::context::{
    ConflictContext, MoveContext, MoveNarrative, OpportunityContext, OpportunityNarrative,
};
use crate::domain::{prompts, response};

/// Default upper bound on a single model call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// A text model that turns a system prompt and a user prompt into text.
///
/// The transport (HTTP client, SDK, local model) lives behind this trait.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Generates a completion for `prompt` under the standing `system`
    /// instructions.
    async fn generate(&self, system: &str, prompt: &str) -> Result<String, NarrativeError>;
}

/// Builds prompts, calls the model under a timeout, and parses the reply.
#[derive(Debug, Clone)]
pub struct ModelNarrator<M> {
    model: M,
    timeout: Duration,
}

impl<M: TextModel> ModelNarrator<M> {
    /// Wraps `model` with the default timeout.
    pub fn new(model: M) -> Self {
        Self::with_timeout(model, DEFAULT_TIMEOUT)
    }

    /// Wraps `model`, bounding every call by `timeout`.
    pub fn with_timeout(model: M, timeout: Duration) -> Self {
        Self { model, timeout }
    }

    async fn ask(&self, prompt: &str) -> Result<String, NarrativeError> {
        let reply = timeout(self.timeout, self.model.generate(prompts::SYSTEM_PROMPT, prompt))
            .await
            .map_err(|_| NarrativeError::Timeout)??;
        debug!(chars = reply.len(), "narrative model replied");
        Ok(reply)
    }
}

#[async_trait]
impl<M: TextModel> NarrativeGenerator for ModelNarrator<M> {
    async fn describe_move(&self, context: MoveContext) -> Result<MoveNarrative, NarrativeError> {
        let reply = self.ask(&prompts::move_prompt(&context)).await?;
        Ok(response::parse_move(&context, &reply))
    }

    async fn describe_conflict(&self, context: ConflictContext) -> Result<String, NarrativeError> {
        let reply = self.ask(&prompts::conflict_prompt(&context)).await?;
        Ok(response::parse_conflict(&context, &reply))
    }

    async fn describe_opportunity(
        &self,
        context: OpportunityContext,
    ) -> Result<OpportunityNarrative, NarrativeError> {
        let reply = self.ask(&prompts::opportunity_prompt(&context)).await?;
        Ok(response::parse_opportunity(&context, &reply))
    }
}
