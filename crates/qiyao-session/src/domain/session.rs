//! The live game session: the state plus any open interaction.

use qiyao_core::error::DomainError;

use super::interaction::Interaction;
use super::state::GameState;

/// Owns the single game in progress.
#[derive(Debug, Default)]
pub struct GameSession {
    pub(crate) state: Option<GameState>,
    pub(crate) interaction: Option<Interaction>,
}

impl GameSession {
    /// An empty session with no game started.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The game in progress, if any.
    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// The interaction awaiting the arbiter, if any.
    #[must_use]
    pub fn interaction(&self) -> Option<&Interaction> {
        self.interaction.as_ref()
    }

    pub(crate) fn require_state(&self) -> Result<&GameState, DomainError> {
        self.state
            .as_ref()
            .ok_or_else(|| DomainError::Validation("no game has been initialized".to_owned()))
    }

    pub(crate) fn require_state_mut(&mut self) -> Result<&mut GameState, DomainError> {
        self.state
            .as_mut()
            .ok_or_else(|| DomainError::Validation("no game has been initialized".to_owned()))
    }
}
