//! Test narrators: `NarrativeGenerator` doubles for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use qiyao_narrative::application::generator::{NarrativeError, NarrativeGenerator};
use qiyao_narrative::domain::context::{
    ConflictContext, MoveContext, MoveNarrative, OpportunityContext, OpportunityNarrative,
};

/// How many times each narrator method was called.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NarratorCalls {
    pub moves: usize,
    pub conflicts: usize,
    pub opportunities: usize,
}

impl NarratorCalls {
    /// Total calls across all three methods.
    #[must_use]
    pub fn total(&self) -> usize {
        self.moves + self.conflicts + self.opportunities
    }
}

/// A narrator returning fixed text and recording every request.
#[derive(Debug, Default)]
pub struct ScriptedNarrator {
    calls: Mutex<NarratorCalls>,
    move_contexts: Mutex<Vec<MoveContext>>,
    opportunity_contexts: Mutex<Vec<OpportunityContext>>,
}

impl ScriptedNarrator {
    /// Event text returned for every move.
    pub const MOVE_TEXT: &'static str = "scripted move";
    /// Text returned for every conflict.
    pub const CONFLICT_TEXT: &'static str = "scripted conflict";
    /// Title returned for every opportunity.
    pub const OPPORTUNITY_TITLE: &'static str = "Scripted Fortune";
    /// Story half of every opportunity description.
    pub const OPPORTUNITY_STORY: &'static str = "scripted story";
    /// Arbiter-notes half of every opportunity description.
    pub const OPPORTUNITY_NOTES: &'static str = "scripted notes";

    /// Creates a narrator with no recorded calls.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the call counters.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn calls(&self) -> NarratorCalls {
        *self.calls.lock().unwrap()
    }

    /// Every move context received, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn move_contexts(&self) -> Vec<MoveContext> {
        self.move_contexts.lock().unwrap().clone()
    }

    /// Every opportunity context received, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn opportunity_contexts(&self) -> Vec<OpportunityContext> {
        self.opportunity_contexts.lock().unwrap().clone()
    }
}

#[async_trait]
impl NarrativeGenerator for ScriptedNarrator {
    async fn describe_move(&self, context: MoveContext) -> Result<MoveNarrative, NarrativeError> {
        self.calls.lock().unwrap().moves += 1;
        self.move_contexts.lock().unwrap().push(context);
        Ok(MoveNarrative {
            location_name: context.location.name.to_owned(),
            event_text: Self::MOVE_TEXT.to_owned(),
            effect_summary: "scripted".to_owned(),
        })
    }

    async fn describe_conflict(&self, _context: ConflictContext) -> Result<String, NarrativeError> {
        self.calls.lock().unwrap().conflicts += 1;
        Ok(Self::CONFLICT_TEXT.to_owned())
    }

    async fn describe_opportunity(
        &self,
        context: OpportunityContext,
    ) -> Result<OpportunityNarrative, NarrativeError> {
        self.calls.lock().unwrap().opportunities += 1;
        self.opportunity_contexts.lock().unwrap().push(context);
        Ok(OpportunityNarrative::new(
            Self::OPPORTUNITY_TITLE,
            Self::OPPORTUNITY_STORY,
            Self::OPPORTUNITY_NOTES,
        ))
    }
}

/// A narrator whose every call fails with the configured error.
#[derive(Debug, Clone)]
pub struct FailingNarrator(pub NarrativeError);

impl Default for FailingNarrator {
    fn default() -> Self {
        Self(NarrativeError::Unavailable)
    }
}

#[async_trait]
impl NarrativeGenerator for FailingNarrator {
    async fn describe_move(&self, _context: MoveContext) -> Result<MoveNarrative, NarrativeError> {
        Err(self.0.clone())
    }

    async fn describe_conflict(&self, _context: ConflictContext) -> Result<String, NarrativeError> {
        Err(self.0.clone())
    }

    async fn describe_opportunity(
        &self,
        _context: OpportunityContext,
    ) -> Result<OpportunityNarrative, NarrativeError> {
        Err(self.0.clone())
    }
}
