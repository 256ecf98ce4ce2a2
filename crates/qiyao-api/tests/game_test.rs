//! Integration tests for the game routes.

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_opportunity_turn_round_trip() {
    let state = common::test_state();

    // Step 1: initialize
    let (status, _) = common::post_json(&state, "/api/v1/game/initialize", &json!({})).await;
    assert_eq!(status, StatusCode::OK);

    // Step 2: advance; MockRng rolls 0.0, so an opportunity opens.
    let (status, json) =
        common::post_json(&state, "/api/v1/game/advance-turn", &json!({ "distance": 4 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["turn"]["outcome"], "interaction_opened");
    assert_eq!(json["turn"]["faction"], "tianhe");
    let interaction = &json["game"]["interaction"];
    assert_eq!(interaction["kind"], "opportunity");
    assert_eq!(interaction["title"], "Scripted Fortune");
    assert_eq!(interaction["arbiter_notes"], "scripted notes");
    assert_eq!(interaction["pending_progress"], 4);
    assert_eq!(json["game"]["factions"][0]["progress"], 0);

    // Step 3: the turn is suspended
    let (status, _) =
        common::post_json(&state, "/api/v1/game/advance-turn", &json!({ "distance": 4 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, json) = common::post_json(
        &state,
        "/api/v1/game/resolve-pvp",
        &json!({ "winner": "tianhe", "mode": "battle" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");

    // Step 4: resolve
    let (status, json) = common::post_json(
        &state,
        "/api/v1/game/resolve-opportunity",
        &json!({
            "success": true,
            "direction": "forward",
            "distance": 3,
            "stat_deltas": { "martial": 5, "strategy": 0, "wealth": 0, "prestige": -2 }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["factions"][0]["progress"], 7);
    assert_eq!(json["factions"][0]["stats"]["martial"], 25);
    assert_eq!(json["factions"][0]["stats"]["prestige"], -2);
    assert_eq!(json["active_faction"], "beige");
    assert!(json["interaction"].is_null());

    // GET: verify the committed state
    let (status, json) = common::get_json(&state, "/api/v1/game").await;
    assert_eq!(status, StatusCode::OK);
    let log = json["log"].as_array().unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(log[1]["category"], "event");
}

#[tokio::test]
async fn test_collision_is_settled_by_battle() {
    let state = common::test_state();
    common::post_json(&state, "/api/v1/game/initialize", &json!({})).await;

    // Tianhe ends its turn at progress 5.
    common::post_json(&state, "/api/v1/game/advance-turn", &json!({ "distance": 5 })).await;
    let (status, _) = common::post_json(
        &state,
        "/api/v1/game/resolve-opportunity",
        &json!({ "success": false, "distance": 0 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Beige lands on the same waypoint.
    let (status, json) =
        common::post_json(&state, "/api/v1/game/advance-turn", &json!({ "distance": "5" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["turn"]["faction"], "beige");
    let interaction = &json["game"]["interaction"];
    assert_eq!(interaction["kind"], "pvp");
    assert_eq!(interaction["target"], "tianhe");
    assert_eq!(interaction["description"], "scripted conflict");

    let (status, json) = common::post_json(
        &state,
        "/api/v1/game/resolve-pvp",
        &json!({ "winner": "beige", "mode": "battle", "distance": 2 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["factions"][0]["progress"], 3);
    assert_eq!(json["factions"][0]["last_move"], "-2 li (defeated)");
    assert_eq!(json["factions"][1]["progress"], 5);
    assert_eq!(json["active_faction"], "wangsheng");
    let log = json["log"].as_array().unwrap();
    assert_eq!(log.last().unwrap()["category"], "conflict");
}

#[tokio::test]
async fn test_edit_stat_coerces_text_value() {
    let state = common::test_state();
    common::post_json(&state, "/api/v1/game/initialize", &json!({})).await;

    let (status, json) = common::post_json(
        &state,
        "/api/v1/game/edit-stat",
        &json!({ "faction": "xueyi", "stat": "wealth", "value": "42 taels" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["factions"][5]["stats"]["wealth"], 42);
    assert!(json["factions"][5]["history"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_edit_stat_without_game_returns_400() {
    let state = common::test_state();

    let (status, json) = common::post_json(
        &state,
        "/api/v1/game/edit-stat",
        &json!({ "faction": "xueyi", "stat": "wealth", "value": 1 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
}

#[tokio::test]
async fn test_document_round_trip_restores_turn_order() {
    let state = common::test_state();
    let reversed = json!(["dari", "xueyi", "nantuo", "fulong", "wangsheng", "beige", "tianhe"]);
    common::post_json(
        &state,
        "/api/v1/game/initialize",
        &json!({ "turn_order": reversed }),
    )
    .await;

    // Download
    let (status, json) = common::get_json(&state, "/api/v1/game/document").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["file_name"], "qiyao_day_1.json");
    let document = json["document"].as_str().unwrap().to_owned();
    assert!(document.contains("2026-01-15T10:00:00Z"));

    // Start over, then upload the download.
    common::post_json(&state, "/api/v1/game/initialize", &json!({})).await;
    let (status, json) = common::post_json(
        &state,
        "/api/v1/game/document",
        &json!({ "document": document }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["active_faction"], "dari");
    assert_eq!(json["turn_queue"], reversed);
}

#[tokio::test]
async fn test_rejected_document_keeps_current_game() {
    let state = common::test_state();
    common::post_json(&state, "/api/v1/game/initialize", &json!({})).await;
    common::post_json(
        &state,
        "/api/v1/game/edit-stat",
        &json!({ "faction": "dari", "stat": "martial", "value": 99 }),
    )
    .await;

    let (status, json) = common::post_json(
        &state,
        "/api/v1/game/document",
        &json!({ "document": "not json at all" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"], "format_error");

    let (_, json) = common::get_json(&state, "/api/v1/game").await;
    assert_eq!(json["factions"][6]["stats"]["martial"], 99);
}

#[tokio::test]
async fn test_command_is_rejected_while_another_holds_the_game() {
    let state = common::test_state();
    let _in_flight = state.table.lock().await;

    let (status, json) = common::post_json(&state, "/api/v1/game/initialize", &json!({})).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"], "turn_in_flight");
}

#[tokio::test]
async fn test_opportunity_accepts_text_and_partial_stat_deltas() {
    let state = common::test_state();
    common::post_json(&state, "/api/v1/game/initialize", &json!({})).await;
    common::post_json(&state, "/api/v1/game/advance-turn", &json!({ "distance": 2 })).await;

    // Text value for one stat, the others left out.
    let (status, json) = common::post_json(
        &state,
        "/api/v1/game/resolve-opportunity",
        &json!({ "success": false, "distance": 0, "stat_deltas": { "martial": "5" } }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["factions"][0]["stats"]["martial"], 25);
    assert_eq!(json["factions"][0]["stats"]["strategy"], 20);
    assert_eq!(json["factions"][0]["stats"]["prestige"], 0);

    // Beige's opportunity: a plain partial object.
    common::post_json(&state, "/api/v1/game/advance-turn", &json!({ "distance": 1 })).await;
    let (status, json) = common::post_json(
        &state,
        "/api/v1/game/resolve-opportunity",
        &json!({ "success": false, "stat_deltas": { "wealth": -4 } }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["factions"][1]["stats"]["wealth"], 16);
    assert_eq!(json["factions"][1]["stats"]["martial"], 20);
}

#[tokio::test]
async fn test_null_distance_counts_as_zero() {
    let state = common::test_state();
    common::post_json(&state, "/api/v1/game/initialize", &json!({})).await;

    let (status, json) = common::post_json(
        &state,
        "/api/v1/game/advance-turn",
        &json!({ "distance": null }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["game"]["interaction"]["pending_progress"], 0);

    let (status, json) = common::post_json(
        &state,
        "/api/v1/game/resolve-opportunity",
        &json!({ "success": true, "direction": "forward", "distance": null }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["factions"][0]["progress"], 0);
}

#[tokio::test]
async fn test_initialize_fills_in_partial_starting_stats() {
    let state = common::test_state();

    let (status, json) = common::post_json(
        &state,
        "/api/v1/game/initialize",
        &json!({ "starting_stats": { "tianhe": { "prestige": "9", "wealth": null } } }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let stats = &json["factions"][0]["stats"];
    assert_eq!(stats["prestige"], 9);
    assert_eq!(stats["wealth"], 20);
    assert_eq!(stats["martial"], 20);
}
