//! Routes for named save slots.

use axum::extract::{Path, State};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use qiyao_core::command::Command;
use qiyao_session::application::command_handlers;
use qiyao_session::application::query_handlers::{self, GameView};
use qiyao_session::domain::commands;
use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for GET /.
#[derive(Debug, Serialize)]
pub struct SlotsResponse {
    /// Slot names, sorted.
    pub slots: Vec<String>,
}

/// Response body for PUT /{slot}.
#[derive(Debug, Serialize)]
pub struct StoredResponse {
    /// The slot written.
    pub slot: String,
}

/// GET /
async fn list_slots(State(state): State<AppState>) -> Result<Json<SlotsResponse>, ApiError> {
    let slots = query_handlers::list_save_slots(state.saves.as_ref()).await?;
    Ok(Json(SlotsResponse { slots }))
}

/// PUT /{slot}
#[instrument(skip(state))]
async fn store_save(
    State(state): State<AppState>,
    Path(slot): Path<String>,
) -> Result<Json<StoredResponse>, ApiError> {
    let command = commands::StoreSave {
        correlation_id: Uuid::new_v4(),
        slot,
    };

    info!(
        correlation_id = %command.correlation_id,
        command_type = command.command_type(),
        "handling store_save command"
    );

    let table = state.claim_table()?;
    command_handlers::handle_store_save(
        &command,
        &table.session,
        state.clock.as_ref(),
        state.saves.as_ref(),
    )
    .await?;

    Ok(Json(StoredResponse { slot: command.slot }))
}

/// POST /{slot}/load
#[instrument(skip(state))]
async fn load_save(
    State(state): State<AppState>,
    Path(slot): Path<String>,
) -> Result<Json<GameView>, ApiError> {
    let command = commands::LoadSave {
        correlation_id: Uuid::new_v4(),
        slot,
    };

    info!(
        correlation_id = %command.correlation_id,
        command_type = command.command_type(),
        "handling load_save command"
    );

    let mut table = state.claim_table()?;
    command_handlers::handle_load_save(&command, &mut table.session, state.saves.as_ref()).await?;

    Ok(Json(query_handlers::get_game_view(&table.session)?))
}

/// Returns the router for save slots.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_slots))
        .route("/{slot}", put(store_save))
        .route("/{slot}/load", post(load_save))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use qiyao_core::repository::SaveRepository;
    use qiyao_test_support::{
        FailingSaveRepository, FixedClock, InMemorySaveRepository, MockRng, ScriptedNarrator,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    fn app_state_with(saves: Arc<dyn SaveRepository>) -> AppState {
        AppState::new(
            Box::new(MockRng),
            Arc::new(ScriptedNarrator::new()),
            Arc::new(FixedClock::epoch()),
            saves,
        )
    }

    async fn json_of(response: axum::response::Response) -> Value {
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body_bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_slots_returns_empty_list() {
        // Arrange
        let app = router().with_state(app_state_with(Arc::new(InMemorySaveRepository::new())));
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_of(response).await;
        assert_eq!(json["slots"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_list_slots_returns_500_when_repository_fails() {
        // Arrange
        let app = router().with_state(app_state_with(Arc::new(FailingSaveRepository)));
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = json_of(response).await;
        assert_eq!(json["error"], "infrastructure_error");
    }

    #[tokio::test]
    async fn test_store_without_game_returns_400() {
        // Arrange
        let app = router().with_state(app_state_with(Arc::new(InMemorySaveRepository::new())));
        let request = Request::builder()
            .method("PUT")
            .uri("/autosave")
            .body(Body::empty())
            .unwrap();

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_load_missing_slot_returns_404() {
        // Arrange
        let app = router().with_state(app_state_with(Arc::new(InMemorySaveRepository::new())));
        let request = Request::builder()
            .method("POST")
            .uri("/nowhere/load")
            .body(Body::empty())
            .unwrap();

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = json_of(response).await;
        assert_eq!(json["error"], "not_found");
    }

    #[tokio::test]
    async fn test_load_rejects_invalid_slot_name() {
        // Arrange
        let app = router().with_state(app_state_with(Arc::new(InMemorySaveRepository::new())));
        let request = Request::builder()
            .method("POST")
            .uri("/day.3/load")
            .body(Body::empty())
            .unwrap();

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
