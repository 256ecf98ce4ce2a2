//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use qiyao_core::repository::SaveRepository;
use qiyao_core::rng::DeterministicRng;
use qiyao_test_support::{FixedClock, InMemorySaveRepository, MockRng, ScriptedNarrator};
use tower::ServiceExt;

use qiyao_api::state::AppState;

/// Builds state around `MockRng`, so every move without a collision opens an
/// opportunity, plus the scripted narrator and an in-memory save store.
pub fn test_state() -> AppState {
    test_state_with(Box::new(MockRng), Arc::new(InMemorySaveRepository::new()))
}

/// Builds state with a custom RNG and save store.
pub fn test_state_with(
    rng: Box<dyn DeterministicRng>,
    saves: Arc<dyn SaveRepository>,
) -> AppState {
    AppState::new(
        rng,
        Arc::new(ScriptedNarrator::new()),
        Arc::new(FixedClock::epoch()),
        saves,
    )
}

/// Build the full app router around `state`. Uses the same route structure
/// as `main.rs`.
pub fn build_test_app(state: &AppState) -> Router {
    qiyao_api::app(state.clone())
}

async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    body: Option<&serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = build_test_app(state).oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    state: &AppState,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send(state, "POST", uri, Some(body)).await
}

/// Send a bodiless request with the given method and return the response.
pub async fn send_empty(
    state: &AppState,
    method: &str,
    uri: &str,
) -> (StatusCode, serde_json::Value) {
    send(state, method, uri, None).await
}

/// Send a GET request and return the response.
pub async fn get_json(state: &AppState, uri: &str) -> (StatusCode, serde_json::Value) {
    send(state, "GET", uri, None).await
}
