//! Shared application state.

use std::sync::Arc;

use qiyao_core::clock::Clock;
use qiyao_core::error::DomainError;
use qiyao_core::repository::SaveRepository;
use qiyao_core::rng::DeterministicRng;
use qiyao_narrative::application::generator::NarrativeGenerator;
use qiyao_session::domain::session::GameSession;
use tokio::sync::{Mutex, MutexGuard};

/// The single game in progress together with the RNG that drives it.
pub struct GameTable {
    /// The live session.
    pub session: GameSession,
    /// Randomness for weather, encounters and scenario picks.
    pub rng: Box<dyn DeterministicRng>,
}

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The game, guarded so at most one command mutates it at a time.
    pub table: Arc<Mutex<GameTable>>,
    /// Narration for moves and encounters.
    pub narrator: Arc<dyn NarrativeGenerator>,
    /// Wall clock used to stamp saved documents.
    pub clock: Arc<dyn Clock>,
    /// Slot storage for saved games.
    pub saves: Arc<dyn SaveRepository>,
}

impl AppState {
    /// Create new application state with an empty session.
    #[must_use]
    pub fn new(
        rng: Box<dyn DeterministicRng>,
        narrator: Arc<dyn NarrativeGenerator>,
        clock: Arc<dyn Clock>,
        saves: Arc<dyn SaveRepository>,
    ) -> Self {
        Self {
            table: Arc::new(Mutex::new(GameTable {
                session: GameSession::new(),
                rng,
            })),
            narrator,
            clock,
            saves,
        }
    }

    /// Claims the game for a mutating command without waiting.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TurnInFlight` if another command holds it.
    pub fn claim_table(&self) -> Result<MutexGuard<'_, GameTable>, DomainError> {
        self.table.try_lock().map_err(|_| DomainError::TurnInFlight)
    }
}
