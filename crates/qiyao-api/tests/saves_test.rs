//! Integration tests for the save slot routes.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use qiyao_test_support::{FailingSaveRepository, MockRng};
use serde_json::json;

#[tokio::test]
async fn test_store_and_load_slot_round_trip() {
    let state = common::test_state();

    let (status, json) = common::get_json(&state, "/api/v1/saves").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["slots"], json!([]));

    // Step 1: save a fresh game
    common::post_json(&state, "/api/v1/game/initialize", &json!({})).await;
    let (status, json) = common::send_empty(&state, "PUT", "/api/v1/saves/day-1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["slot"], "day-1");

    let (_, json) = common::get_json(&state, "/api/v1/saves").await;
    assert_eq!(json["slots"], json!(["day-1"]));

    // Step 2: play on until an interaction is open
    let (_, json) =
        common::post_json(&state, "/api/v1/game/advance-turn", &json!({ "distance": 6 })).await;
    assert!(json["game"]["interaction"].is_object());

    // Step 3: load drops the interaction and restores the saved game
    let (status, json) = common::send_empty(&state, "POST", "/api/v1/saves/day-1/load").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["interaction"].is_null());
    assert_eq!(json["active_faction"], "tianhe");
    assert_eq!(json["log"].as_array().unwrap().len(), 1);

    // The game can continue after a load.
    let (status, _) =
        common::post_json(&state, "/api/v1/game/advance-turn", &json!({ "distance": 2 })).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_load_empty_slot_returns_404() {
    let state = common::test_state();

    let (status, json) = common::send_empty(&state, "POST", "/api/v1/saves/never/load").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "not_found");
}

#[tokio::test]
async fn test_store_returns_500_when_repository_fails() {
    let state = common::test_state_with(Box::new(MockRng), Arc::new(FailingSaveRepository));
    common::post_json(&state, "/api/v1/game/initialize", &json!({})).await;

    let (status, json) = common::send_empty(&state, "PUT", "/api/v1/saves/autosave").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "infrastructure_error");

    // The game itself is unaffected.
    let (status, _) = common::get_json(&state, "/api/v1/game").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_store_rejects_invalid_slot_name() {
    let state = common::test_state();
    common::post_json(&state, "/api/v1/game/initialize", &json!({})).await;

    let (status, json) = common::send_empty(&state, "PUT", "/api/v1/saves/day%201").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
}
