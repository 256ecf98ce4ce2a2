//! Routes for the game in progress.
//!
//! Every mutating route claims the game table without waiting, so a second
//! command arriving while a turn is still being narrated gets a 409.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use qiyao_core::command::Command;
use qiyao_faction::domain::identity::FactionId;
use qiyao_faction::domain::stats::{DEFAULT_STARTING_STATS, StatName, Stats};
use qiyao_session::application::command_handlers::{self, TurnOutcome};
use qiyao_session::application::query_handlers::{self, GameView};
use qiyao_session::domain::commands;
use qiyao_session::domain::document;
use qiyao_session::domain::input::{ArbiterNumber, ArbiterStats};
use qiyao_session::domain::resolution::{PvpMode, RewardDirection};
use qiyao_track::domain::path::Point;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::{AppState, GameTable};

/// Request body for POST /initialize.
#[derive(Debug, Default, Deserialize)]
pub struct InitializeRequest {
    /// Turn order; canonical order when omitted.
    #[serde(default)]
    pub turn_order: Option<Vec<FactionId>>,
    /// Starting stats for some or all factions; stats left out of an entry
    /// keep their defaults.
    #[serde(default)]
    pub starting_stats: BTreeMap<FactionId, ArbiterStats>,
    /// Path drawn over the map.
    #[serde(default)]
    pub path: Option<Vec<Point>>,
}

/// Request body for POST /advance-turn.
#[derive(Debug, Deserialize)]
pub struct AdvanceTurnRequest {
    /// Distance rolled for the active faction.
    #[serde(default)]
    pub distance: ArbiterNumber,
}

/// Request body for POST /resolve-pvp.
#[derive(Debug, Deserialize)]
pub struct ResolvePvpRequest {
    pub winner: FactionId,
    pub mode: PvpMode,
    #[serde(default)]
    pub distance: ArbiterNumber,
}

/// Request body for POST /resolve-opportunity.
#[derive(Debug, Deserialize)]
pub struct ResolveOpportunityRequest {
    pub success: bool,
    #[serde(default)]
    pub direction: RewardDirection,
    #[serde(default)]
    pub distance: ArbiterNumber,
    /// Stats left out count as no change.
    #[serde(default)]
    pub stat_deltas: ArbiterStats,
    #[serde(default)]
    pub skip_next_turn: bool,
    #[serde(default)]
    pub extra_action: bool,
}

/// Request body for POST /edit-stat.
#[derive(Debug, Deserialize)]
pub struct EditStatRequest {
    pub faction: FactionId,
    pub stat: StatName,
    pub value: ArbiterNumber,
}

/// Request body for POST /document.
#[derive(Debug, Deserialize)]
pub struct LoadDocumentRequest {
    /// The saved-game document, exactly as GET /document returned it.
    pub document: String,
}

/// Response body for POST /advance-turn.
#[derive(Debug, Serialize)]
pub struct AdvanceTurnResponse {
    /// What the turn led to.
    pub turn: TurnOutcome,
    /// The game after the turn.
    pub game: GameView,
}

/// Response body for GET /document.
#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    /// Suggested file name for a download.
    pub file_name: String,
    /// The saved-game document.
    pub document: String,
}

/// GET /
async fn get_game(State(state): State<AppState>) -> Result<Json<GameView>, ApiError> {
    let table = state.table.lock().await;
    let view = query_handlers::get_game_view(&table.session)?;
    Ok(Json(view))
}

/// POST /initialize
#[instrument(skip(state, request))]
async fn initialize(
    State(state): State<AppState>,
    Json(request): Json<InitializeRequest>,
) -> Result<Json<GameView>, ApiError> {
    let command = commands::InitializeGame {
        correlation_id: Uuid::new_v4(),
        turn_order: request.turn_order,
        starting_stats: request
            .starting_stats
            .iter()
            .map(|(id, entered)| (*id, entered.over(DEFAULT_STARTING_STATS)))
            .collect(),
        path: request.path,
    };

    info!(
        correlation_id = %command.correlation_id,
        command_type = command.command_type(),
        "handling initialize_game command"
    );

    let mut table = state.claim_table()?;
    let GameTable { session, rng } = &mut *table;
    command_handlers::handle_initialize(&command, session, &mut **rng)?;

    Ok(Json(query_handlers::get_game_view(session)?))
}

/// POST /advance-turn
#[instrument(skip(state, request), fields(distance = ?request.distance))]
async fn advance_turn(
    State(state): State<AppState>,
    Json(request): Json<AdvanceTurnRequest>,
) -> Result<Json<AdvanceTurnResponse>, ApiError> {
    let command = commands::AdvanceTurn {
        correlation_id: Uuid::new_v4(),
        distance: request.distance,
    };

    info!(
        correlation_id = %command.correlation_id,
        command_type = command.command_type(),
        "handling advance_turn command"
    );

    let mut table = state.claim_table()?;
    let GameTable { session, rng } = &mut *table;
    let turn = command_handlers::handle_advance_turn(
        &command,
        session,
        state.narrator.as_ref(),
        &mut **rng,
    )
    .await?;

    let game = query_handlers::get_game_view(session)?;
    Ok(Json(AdvanceTurnResponse { turn, game }))
}

/// POST /resolve-pvp
#[instrument(skip(state, request), fields(winner = %request.winner, mode = ?request.mode))]
async fn resolve_pvp(
    State(state): State<AppState>,
    Json(request): Json<ResolvePvpRequest>,
) -> Result<Json<GameView>, ApiError> {
    let command = commands::ResolvePvp {
        correlation_id: Uuid::new_v4(),
        winner: request.winner,
        mode: request.mode,
        distance: request.distance,
    };

    info!(
        correlation_id = %command.correlation_id,
        command_type = command.command_type(),
        "handling resolve_pvp command"
    );

    let mut table = state.claim_table()?;
    let GameTable { session, rng } = &mut *table;
    command_handlers::handle_resolve_pvp(&command, session, &mut **rng)?;

    Ok(Json(query_handlers::get_game_view(session)?))
}

/// POST /resolve-opportunity
#[instrument(skip(state, request), fields(success = request.success))]
async fn resolve_opportunity(
    State(state): State<AppState>,
    Json(request): Json<ResolveOpportunityRequest>,
) -> Result<Json<GameView>, ApiError> {
    let command = commands::ResolveOpportunity {
        correlation_id: Uuid::new_v4(),
        success: request.success,
        direction: request.direction,
        distance: request.distance,
        stat_deltas: request.stat_deltas.over(Stats::default()),
        skip_next_turn: request.skip_next_turn,
        extra_action: request.extra_action,
    };

    info!(
        correlation_id = %command.correlation_id,
        command_type = command.command_type(),
        "handling resolve_opportunity command"
    );

    let mut table = state.claim_table()?;
    let GameTable { session, rng } = &mut *table;
    command_handlers::handle_resolve_opportunity(&command, session, &mut **rng)?;

    Ok(Json(query_handlers::get_game_view(session)?))
}

/// POST /edit-stat
#[instrument(skip(state, request), fields(faction = %request.faction, stat = ?request.stat))]
async fn edit_stat(
    State(state): State<AppState>,
    Json(request): Json<EditStatRequest>,
) -> Result<Json<GameView>, ApiError> {
    let command = commands::EditStat {
        correlation_id: Uuid::new_v4(),
        faction: request.faction,
        stat: request.stat,
        value: request.value,
    };

    info!(
        correlation_id = %command.correlation_id,
        command_type = command.command_type(),
        "handling edit_stat command"
    );

    let mut table = state.claim_table()?;
    command_handlers::handle_edit_stat(&command, &mut table.session)?;

    Ok(Json(query_handlers::get_game_view(&table.session)?))
}

/// GET /document
#[instrument(skip(state))]
async fn save_document(State(state): State<AppState>) -> Result<Json<DocumentResponse>, ApiError> {
    let command = commands::SaveGame {
        correlation_id: Uuid::new_v4(),
    };

    info!(
        correlation_id = %command.correlation_id,
        command_type = command.command_type(),
        "handling save_game command"
    );

    let table = state.table.lock().await;
    let saved =
        command_handlers::handle_save_game(&command, &table.session, state.clock.as_ref())?;
    let file_name = table
        .session
        .state()
        .map(document::suggested_file_name)
        .unwrap_or_default();

    Ok(Json(DocumentResponse {
        file_name,
        document: saved,
    }))
}

/// POST /document
#[instrument(skip(state, request))]
async fn load_document(
    State(state): State<AppState>,
    Json(request): Json<LoadDocumentRequest>,
) -> Result<Json<GameView>, ApiError> {
    let command = commands::LoadGame {
        correlation_id: Uuid::new_v4(),
        document: request.document,
    };

    info!(
        correlation_id = %command.correlation_id,
        command_type = command.command_type(),
        "handling load_game command"
    );

    let mut table = state.claim_table()?;
    command_handlers::handle_load_game(&command, &mut table.session)?;

    Ok(Json(query_handlers::get_game_view(&table.session)?))
}

/// Returns the router for the game in progress.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_game))
        .route("/initialize", post(initialize))
        .route("/advance-turn", post(advance_turn))
        .route("/resolve-pvp", post(resolve_pvp))
        .route("/resolve-opportunity", post(resolve_opportunity))
        .route("/edit-stat", post(edit_stat))
        .route("/document", get(save_document).post(load_document))
}
