//! Query handlers for the game session.
//!
//! This module builds the read-only snapshot the presentation layer
//! renders. Nothing here mutates the session.

use qiyao_core::error::DomainError;
use qiyao_core::repository::SaveRepository;
use qiyao_faction::domain::identity::FactionId;
use qiyao_faction::domain::state::FactionState;
use qiyao_faction::domain::stats::Stats;
use qiyao_narrative::domain::context::split_notes;
use qiyao_track::domain::path::{self, Point};
use serde::Serialize;

use crate::domain::interaction::{Interaction, InteractionKind};
use crate::domain::log::LogEntry;
use crate::domain::session::GameSession;
use crate::domain::state::GameState;

/// Read-only view of one faction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactionView {
    pub id: FactionId,
    pub name: &'static str,
    pub title: &'static str,
    pub progress: i32,
    /// Completion percentage, 0 to 100.
    pub percentage: f64,
    pub location_name: &'static str,
    pub location_description: &'static str,
    /// Marker position on the map, in percentage coordinates.
    pub position: Point,
    pub stats: Stats,
    pub skip_next_turn: bool,
    pub last_move: String,
    pub visited_locations: Vec<String>,
    pub history: Vec<String>,
}

/// Read-only view of the open interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InteractionView {
    Pvp {
        actor: FactionId,
        target: FactionId,
        location_name: String,
        description: String,
        pending_progress: i32,
    },
    Opportunity {
        actor: FactionId,
        title: String,
        location_name: String,
        description: String,
        /// Guidance for the arbiter, split off the description.
        arbiter_notes: Option<String>,
        pending_progress: i32,
    },
}

/// Read-only snapshot of the whole game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameView {
    pub day: u32,
    pub weather: &'static str,
    pub turn_queue: Vec<FactionId>,
    pub active_index: usize,
    pub active_faction: FactionId,
    pub day_complete: bool,
    pub factions: Vec<FactionView>,
    /// Factions standing on the goal, in canonical order.
    pub arrivals: Vec<FactionId>,
    pub interaction: Option<InteractionView>,
    pub log: Vec<LogEntry>,
    pub path: Option<Vec<Point>>,
}

fn faction_views(state: &GameState) -> Vec<FactionView> {
    state
        .factions()
        .iter()
        .map(|faction| {
            let info = faction.id().info();
            let location = faction.location();
            let progress = f64::from(faction.progress());
            FactionView {
                id: faction.id(),
                name: info.name,
                title: info.title,
                progress: faction.progress(),
                percentage: path::progress_percentage(progress),
                location_name: location.name,
                location_description: location.description,
                position: path::project(progress, state.path()),
                stats: faction.stats(),
                skip_next_turn: faction.skip_next_turn(),
                last_move: faction.last_move().to_owned(),
                visited_locations: faction.visited_locations().to_vec(),
                history: faction.history().to_vec(),
            }
        })
        .collect()
}

fn interaction_view(interaction: &Interaction) -> InteractionView {
    match &interaction.kind {
        InteractionKind::Pvp { target } => InteractionView::Pvp {
            actor: interaction.actor,
            target: *target,
            location_name: interaction.location_name.clone(),
            description: interaction.narrative.clone(),
            pending_progress: interaction.pending_progress,
        },
        InteractionKind::Opportunity { title } => {
            let (story, notes) = split_notes(&interaction.narrative);
            InteractionView::Opportunity {
                actor: interaction.actor,
                title: title.clone(),
                location_name: interaction.location_name.clone(),
                description: story.to_owned(),
                arbiter_notes: notes.map(str::to_owned),
                pending_progress: interaction.pending_progress,
            }
        }
    }
}

/// Builds the snapshot of the game in progress.
///
/// # Errors
///
/// Returns `DomainError::Validation` if no game has been initialized, the
/// same rejection every command gives.
pub fn get_game_view(session: &GameSession) -> Result<GameView, DomainError> {
    let state = session.require_state()?;

    Ok(GameView {
        day: state.day(),
        weather: state.weather().label(),
        turn_queue: state.turn_queue().to_vec(),
        active_index: state.active_index(),
        active_faction: state.active_faction(),
        day_complete: state.day_complete(),
        factions: faction_views(state),
        arrivals: state
            .factions()
            .iter()
            .filter(|faction| faction.has_arrived())
            .map(FactionState::id)
            .collect(),
        interaction: session.interaction().map(interaction_view),
        log: state.log().to_vec(),
        path: state.path().map(<[Point]>::to_vec),
    })
}

/// Lists the save slots currently written, sorted by name.
///
/// # Errors
///
/// Propagates repository failures.
pub async fn list_save_slots(repo: &dyn SaveRepository) -> Result<Vec<String>, DomainError> {
    repo.slots().await
}
