//! Command handlers for the game session.
//!
//! Each handler validates the command against the current phase, plans the
//! change, and applies it in one step. A rejected command leaves the
//! session exactly as it was.

use qiyao_core::clock::Clock;
use qiyao_core::error::DomainError;
use qiyao_core::repository::{SaveRepository, is_valid_slot};
use qiyao_core::rng::DeterministicRng;
use qiyao_faction::domain::identity::FactionId;
use qiyao_faction::domain::stats::DEFAULT_STARTING_STATS;
use qiyao_faction::domain::store::FactionStore;
use qiyao_narrative::application::fallback;
use qiyao_narrative::application::generator::NarrativeGenerator;
use qiyao_narrative::domain::context::{ConflictContext, MoveContext, OpportunityContext};
use qiyao_narrative::domain::scenarios;
use qiyao_track::domain::locations;
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::commands::{
    AdvanceTurn, EditStat, InitializeGame, LoadGame, LoadSave, ResolveOpportunity, ResolvePvp,
    SaveGame, StoreSave,
};
use crate::domain::document;
use crate::domain::encounter::{self, Encounter};
use crate::domain::interaction::{Interaction, InteractionKind};
use crate::domain::resolution::{self, OpportunityRuling, PvpRuling, ResolvedTurn};
use crate::domain::session::GameSession;
use crate::domain::state::GameState;

/// What starting a turn led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TurnOutcome {
    /// The faction's skip flag consumed the turn.
    Skipped { faction: FactionId },
    /// The faction moved and the turn is committed.
    Moved { faction: FactionId, progress: i32 },
    /// The turn is suspended until the arbiter resolves an interaction.
    InteractionOpened { faction: FactionId },
}

fn no_interaction() -> DomainError {
    DomainError::Validation("no interaction is awaiting a ruling".to_owned())
}

fn check_slot(slot: &str) -> Result<(), DomainError> {
    if is_valid_slot(slot) {
        Ok(())
    } else {
        Err(DomainError::Validation(format!("invalid save slot name: {slot:?}")))
    }
}

/// Handles the `InitializeGame` command: starts a fresh race and discards
/// any open interaction.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the turn order is not a permutation
/// of all factions. The session is untouched in that case.
pub fn handle_initialize(
    command: &InitializeGame,
    session: &mut GameSession,
    rng: &mut dyn DeterministicRng,
) -> Result<(), DomainError> {
    let factions = FactionStore::new(|id| {
        command
            .starting_stats
            .get(&id)
            .copied()
            .unwrap_or(DEFAULT_STARTING_STATS)
    });
    let order = command
        .turn_order
        .clone()
        .unwrap_or_else(|| FactionId::ALL.to_vec());
    let state = GameState::new(order, factions, command.path.clone(), rng)?;

    session.state = Some(state);
    session.interaction = None;
    Ok(())
}

/// Handles the `AdvanceTurn` command: plays the active faction's turn.
///
/// A skip-flagged faction's turn is consumed at once, with no narration and
/// no encounter check. Otherwise the move is narrated, then classified; a
/// collision or a successful opportunity roll suspends the turn as an open
/// interaction, and anything else commits immediately.
///
/// # Errors
///
/// Returns `DomainError::Validation` if no game is running or an
/// interaction is still open. Narrator failures are not errors: fallback
/// text is used instead.
pub async fn handle_advance_turn(
    command: &AdvanceTurn,
    session: &mut GameSession,
    narrator: &dyn NarrativeGenerator,
    rng: &mut dyn DeterministicRng,
) -> Result<TurnOutcome, DomainError> {
    if session.interaction.is_some() {
        return Err(DomainError::Validation(
            "an interaction is awaiting the arbiter's ruling".to_owned(),
        ));
    }

    let state = session.require_state()?;
    let actor = state.active_faction();
    let faction = state.factions().get(actor);

    if faction.skip_next_turn() {
        let turn = ResolvedTurn::skipped(state, actor);
        session.require_state_mut()?.apply_turn(turn, rng);
        debug!(%actor, "turn consumed by skip flag");
        return Ok(TurnOutcome::Skipped { faction: actor });
    }

    let distance = command.distance.distance();
    let pending =
        locations::clamp_progress(i64::from(faction.progress()) + i64::from(distance));
    let destination = locations::location_of(pending);
    let stats = faction.stats();
    let weather = state.weather();
    let move_context = MoveContext {
        faction: actor,
        stats,
        location: destination,
        day: state.day(),
        weather,
        distance,
    };

    let narrative = match narrator.describe_move(move_context).await {
        Ok(narrative) => narrative,
        Err(e) => {
            warn!(error = %e, %actor, "move narration failed; using fallback text");
            fallback::move_narrative(&move_context)
        }
    };

    let encounter = encounter::detect(session.require_state()?, actor, destination, rng);
    match encounter {
        Encounter::Collision(target) => {
            let context = ConflictContext {
                actor,
                target,
                location: destination,
                weather,
            };
            let text = match narrator.describe_conflict(context).await {
                Ok(text) => text,
                Err(e) => {
                    warn!(error = %e, %actor, "conflict narration failed; using fallback text");
                    fallback::conflict_narrative(&context)
                }
            };
            session.interaction = Some(Interaction {
                kind: InteractionKind::Pvp { target },
                actor,
                location_name: destination.name.to_owned(),
                narrative: text,
                pending_progress: pending,
            });
            Ok(TurnOutcome::InteractionOpened { faction: actor })
        }
        Encounter::OpportunityRoll => {
            let context = OpportunityContext {
                faction: actor,
                stats,
                location: destination,
                weather,
                scenario: scenarios::pick_scenario(rng),
            };
            let opportunity = match narrator.describe_opportunity(context).await {
                Ok(opportunity) => opportunity,
                Err(e) => {
                    warn!(error = %e, %actor, "opportunity narration failed; using fallback text");
                    fallback::opportunity_narrative(&context)
                }
            };
            session.interaction = Some(Interaction {
                kind: InteractionKind::Opportunity {
                    title: opportunity.title,
                },
                actor,
                location_name: destination.name.to_owned(),
                narrative: opportunity.description,
                pending_progress: pending,
            });
            Ok(TurnOutcome::InteractionOpened { faction: actor })
        }
        Encounter::None => {
            let turn = ResolvedTurn::plain_move(actor, pending, narrative.event_text);
            session.require_state_mut()?.apply_turn(turn, rng);
            Ok(TurnOutcome::Moved {
                faction: actor,
                progress: pending,
            })
        }
    }
}

/// Handles the `ResolvePvp` command: settles the open meeting and commits
/// the actor's turn.
///
/// # Errors
///
/// Returns `DomainError::Validation` if no meeting is open or the winner is
/// not one of its two factions.
pub fn handle_resolve_pvp(
    command: &ResolvePvp,
    session: &mut GameSession,
    rng: &mut dyn DeterministicRng,
) -> Result<(), DomainError> {
    let state = session.require_state()?;
    let interaction = session.interaction.as_ref().ok_or_else(no_interaction)?;
    let ruling = PvpRuling {
        winner: command.winner,
        mode: command.mode,
        distance: command.distance.distance(),
    };
    let turn = resolution::plan_pvp(state, interaction, ruling)?;

    session.interaction = None;
    session.require_state_mut()?.apply_turn(turn, rng);
    Ok(())
}

/// Handles the `ResolveOpportunity` command: settles the open chance
/// encounter and commits the actor's turn.
///
/// # Errors
///
/// Returns `DomainError::Validation` if no opportunity is open.
pub fn handle_resolve_opportunity(
    command: &ResolveOpportunity,
    session: &mut GameSession,
    rng: &mut dyn DeterministicRng,
) -> Result<(), DomainError> {
    let state = session.require_state()?;
    let interaction = session.interaction.as_ref().ok_or_else(no_interaction)?;
    let ruling = OpportunityRuling {
        success: command.success,
        direction: command.direction,
        distance: command.distance.distance(),
        stat_deltas: command.stat_deltas,
        skip_next_turn: command.skip_next_turn,
        extra_action: command.extra_action,
    };
    let turn = resolution::plan_opportunity(state, interaction, ruling)?;

    session.interaction = None;
    session.require_state_mut()?.apply_turn(turn, rng);
    Ok(())
}

/// Handles the `EditStat` command.
///
/// # Errors
///
/// Returns `DomainError::Validation` if no game is running.
pub fn handle_edit_stat(command: &EditStat, session: &mut GameSession) -> Result<(), DomainError> {
    session
        .require_state_mut()?
        .set_stat(command.faction, command.stat, command.value.value());
    Ok(())
}

/// Handles the `SaveGame` command: renders the saved document.
///
/// # Errors
///
/// Returns `DomainError::Validation` if no game is running, or
/// `DomainError::Infrastructure` if serialization fails.
pub fn handle_save_game(
    _command: &SaveGame,
    session: &GameSession,
    clock: &dyn Clock,
) -> Result<String, DomainError> {
    document::save(session.require_state()?, clock)
}

/// Handles the `LoadGame` command: replaces the game with the document's
/// and drops any open interaction.
///
/// # Errors
///
/// Returns `DomainError::Format` if the document is rejected; the session
/// is untouched in that case.
pub fn handle_load_game(command: &LoadGame, session: &mut GameSession) -> Result<(), DomainError> {
    let state = document::load(&command.document).inspect_err(|e| {
        warn!(error = %e, "rejected saved document");
    })?;
    session.state = Some(state);
    session.interaction = None;
    Ok(())
}

/// Handles the `StoreSave` command: writes the saved document to a slot.
///
/// # Errors
///
/// Returns `DomainError::Validation` for a bad slot name or when no game is
/// running, and propagates repository failures.
pub async fn handle_store_save(
    command: &StoreSave,
    session: &GameSession,
    clock: &dyn Clock,
    repo: &dyn SaveRepository,
) -> Result<(), DomainError> {
    check_slot(&command.slot)?;
    let document = document::save(session.require_state()?, clock)?;
    repo.store(&command.slot, &document).await
}

/// Handles the `LoadSave` command: loads the document held in a slot.
///
/// # Errors
///
/// Returns `DomainError::Validation` for a bad slot name,
/// `DomainError::NotFound` for an empty slot, and `DomainError::Format` for
/// a rejected document.
pub async fn handle_load_save(
    command: &LoadSave,
    session: &mut GameSession,
    repo: &dyn SaveRepository,
) -> Result<(), DomainError> {
    check_slot(&command.slot)?;
    let document = repo.fetch(&command.slot).await?;
    handle_load_game(
        &LoadGame {
            correlation_id: command.correlation_id,
            document,
        },
        session,
    )
}
