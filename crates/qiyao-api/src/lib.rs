//! Qiyao race engine: HTTP API.
//!
//! Exposes the arbiter's command surface over axum. The binary in
//! `main.rs` wires production collaborators into [`app`]; tests build the
//! same router around doubles.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the full application router.
pub fn app(app_state: AppState) -> Router {
    // TODO: Replace CorsLayer::permissive() with the arbiter UI's origin once it is hosted.
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/game", routes::game::router())
        .nest("/api/v1/saves", routes::saves::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
