// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Spin-wheel flow against a mock hotel API.

use axum::http::{Method, StatusCode};
use httpmock::prelude::*;
use serde_json::json;

mod common;

fn guest() -> serde_json::Value {
    json!({
        "customer_name": "Maria Lopez",
        "phone": "555-1234",
        "birth_date": "1990-04-12"
    })
}

async fn mock_prizes(app: &common::TestApp) {
    app.server
        .mock_async(|when, then| {
            when.method(GET).path("/api/spin-wheel/prizes/active/");
            then.status(200).json_body(json!([
                common::prize_json(1, "Free Drink", "🥤"),
                common::prize_json(2, "Dessert on Us", "🍰")
            ]));
        })
        .await;
}

async fn mock_existing_customer(app: &common::TestApp, has_played: bool) {
    app.server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/customers/customers/search/")
                .query_param("q", "555-1234");
            then.status(200)
                .json_body(json!([common::customer_json(42, "Maria Lopez", "555-1234")]));
        })
        .await;
    app.server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/customers/customers/42/game-status/");
            then.status(200).json_body(json!({
                "has_played": has_played,
                "first_play_date": null
            }));
        })
        .await;
}

#[tokio::test]
async fn test_spin_wheel_is_public() {
    let app = common::create_test_app().await;
    mock_prizes(&app).await;

    let (status, body) = common::send(&app.router, Method::GET, "/spin-wheel", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["phase"]["phase"], "idle");
    assert_eq!(body["prizes"].as_array().unwrap().len(), 2);
    assert_eq!(body["can_spin"], false);
}

#[tokio::test]
async fn test_full_play() {
    let app = common::create_test_app().await;
    mock_prizes(&app).await;
    mock_existing_customer(&app, false).await;
    let play = app
        .server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/spin-wheel/games/play/")
                .json_body(json!({"customer_id": "42"}));
            then.status(201).json_body(json!({
                "prize": {
                    "id": 2,
                    "name": "Dessert on Us",
                    "description": "",
                    "icon": "",
                    "probability": 15
                },
                "customer_name": "Maria Lopez",
                "played_at": "2026-05-01T10:00:00Z",
                "is_first_play": true
            }));
        })
        .await;
    common::send(&app.router, Method::GET, "/spin-wheel", None).await;

    let (status, body) =
        common::send(&app.router, Method::POST, "/spin-wheel/customer", Some(guest())).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["phase"]["phase"], "ready_to_spin");
    assert_eq!(body["can_spin"], true);
    assert_eq!(body["notice"], "Welcome Maria Lopez! You can now spin the wheel! 🎉");

    let (status, body) = common::send(&app.router, Method::POST, "/spin-wheel/spin", None).await;
    play.assert_async().await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["phase"]["phase"], "result_shown");
    assert_eq!(body["phase"]["prize"]["icon"], "🍰");
    assert_eq!(body["played_customers"], json!(["42"]));

    let (status, body) =
        common::send(&app.router, Method::POST, "/spin-wheel/play-again", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["phase"]["phase"], "idle");
    assert_eq!(body["show_customer_form"], true);
    assert!(body["notice"]
        .as_str()
        .unwrap()
        .starts_with("Sorry Maria Lopez, you have already played"));

    let (status, _) = common::send(&app.router, Method::POST, "/spin-wheel/spin", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(play.calls_async().await, 1);
}

#[tokio::test]
async fn test_returning_player_is_blocked_before_spinning() {
    let app = common::create_test_app().await;
    mock_prizes(&app).await;
    mock_existing_customer(&app, true).await;
    let play = app
        .server
        .mock_async(|when, then| {
            when.method(POST).path("/api/spin-wheel/games/play/");
            then.status(201);
        })
        .await;
    common::send(&app.router, Method::GET, "/spin-wheel", None).await;

    let (status, body) =
        common::send(&app.router, Method::POST, "/spin-wheel/customer", Some(guest())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["phase"]["phase"], "idle");
    assert_eq!(body["show_customer_form"], true);
    assert_eq!(body["can_spin"], false);
    assert!(body["notice"]
        .as_str()
        .unwrap()
        .starts_with("Sorry Maria Lopez"));

    let (status, _) = common::send(&app.router, Method::POST, "/spin-wheel/spin", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(play.calls_async().await, 0);
}

#[tokio::test]
async fn test_game_status_error_fails_closed() {
    let app = common::create_test_app().await;
    mock_prizes(&app).await;
    app.server
        .mock_async(|when, then| {
            when.method(GET).path("/api/customers/customers/search/");
            then.status(200)
                .json_body(json!([common::customer_json(42, "Maria Lopez", "555-1234")]));
        })
        .await;
    app.server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/customers/customers/42/game-status/");
            then.status(500);
        })
        .await;
    common::send(&app.router, Method::GET, "/spin-wheel", None).await;

    let (status, _) =
        common::send(&app.router, Method::POST, "/spin-wheel/customer", Some(guest())).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let (_, body) = common::send(&app.router, Method::GET, "/spin-wheel", None).await;
    assert_eq!(body["phase"]["phase"], "idle");
    assert_eq!(body["error"], "Failed to check game status");
}

#[tokio::test]
async fn test_game_status_error_drops_previous_customer() {
    let app = common::create_test_app().await;
    mock_prizes(&app).await;
    mock_existing_customer(&app, false).await;
    app.server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/customers/customers/search/")
                .query_param("q", "555-9999");
            then.status(200)
                .json_body(json!([common::customer_json(43, "Ana Ruiz", "555-9999")]));
        })
        .await;
    app.server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/customers/customers/43/game-status/");
            then.status(500);
        })
        .await;
    let play = app
        .server
        .mock_async(|when, then| {
            when.method(POST).path("/api/spin-wheel/games/play/");
            then.status(201);
        })
        .await;
    common::send(&app.router, Method::GET, "/spin-wheel", None).await;

    let (_, body) =
        common::send(&app.router, Method::POST, "/spin-wheel/customer", Some(guest())).await;
    assert_eq!(body["phase"]["phase"], "ready_to_spin");

    let (status, _) = common::send(
        &app.router,
        Method::POST,
        "/spin-wheel/customer",
        Some(json!({
            "customer_name": "Ana Ruiz",
            "phone": "555-9999",
            "birth_date": "1985-09-30"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let (_, body) = common::send(&app.router, Method::GET, "/spin-wheel", None).await;
    assert_eq!(body["phase"]["phase"], "idle");
    assert_eq!(body["error"], "Failed to check game status");
    assert_eq!(body["can_spin"], false);
    assert_eq!(body["show_customer_form"], true);

    let (status, _) = common::send(&app.router, Method::POST, "/spin-wheel/spin", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(play.calls_async().await, 0);
}

#[tokio::test]
async fn test_no_prizes_means_no_spinning() {
    let app = common::create_test_app().await;
    app.server
        .mock_async(|when, then| {
            when.method(GET).path("/api/spin-wheel/prizes/active/");
            then.status(200).json_body(json!([]));
        })
        .await;
    mock_existing_customer(&app, false).await;
    let play = app
        .server
        .mock_async(|when, then| {
            when.method(POST).path("/api/spin-wheel/games/play/");
            then.status(201);
        })
        .await;

    let (_, body) = common::send(&app.router, Method::GET, "/spin-wheel", None).await;
    assert!(body["error"].as_str().unwrap().contains("No prizes"));

    common::send(&app.router, Method::POST, "/spin-wheel/customer", Some(guest())).await;
    let (status, _) = common::send(&app.router, Method::POST, "/spin-wheel/spin", None).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(play.calls_async().await, 0);
}

#[tokio::test]
async fn test_play_error_allows_manual_retry() {
    let app = common::create_test_app().await;
    mock_prizes(&app).await;
    mock_existing_customer(&app, false).await;
    app.server
        .mock_async(|when, then| {
            when.method(POST).path("/api/spin-wheel/games/play/");
            then.status(500);
        })
        .await;
    common::send(&app.router, Method::GET, "/spin-wheel", None).await;
    common::send(&app.router, Method::POST, "/spin-wheel/customer", Some(guest())).await;

    let (status, _) = common::send(&app.router, Method::POST, "/spin-wheel/spin", None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let (_, body) = common::send(&app.router, Method::GET, "/spin-wheel", None).await;
    assert_eq!(body["phase"]["phase"], "ready_to_spin");
    assert_eq!(body["error"], "Failed to play spin wheel");
    assert_eq!(body["can_spin"], true);
}

#[tokio::test]
async fn test_customer_form_is_validated_locally() {
    let app = common::create_test_app().await;
    let search = app
        .server
        .mock_async(|when, then| {
            when.method(GET).path("/api/customers/customers/search/");
            then.status(200).json_body(json!([]));
        })
        .await;

    let (status, _) = common::send(
        &app.router,
        Method::POST,
        "/spin-wheel/customer",
        Some(json!({"customer_name": "Maria", "phone": "555-1234"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(search.calls_async().await, 0);
}

#[tokio::test]
async fn test_claim_prize() {
    let app = common::create_test_app().await;
    mock_prizes(&app).await;
    mock_existing_customer(&app, false).await;
    app.server
        .mock_async(|when, then| {
            when.method(POST).path("/api/spin-wheel/games/play/");
            then.status(201).json_body(json!({
                "prize": common::prize_json(1, "Free Drink", "🥤"),
                "customer_name": "Maria Lopez",
                "played_at": "2026-05-01T10:00:00Z",
                "is_first_play": true
            }));
        })
        .await;
    app.server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/spin-wheel/games/")
                .query_param("customer_id", "42");
            then.status(200).json_body(common::page(vec![json!({
                "id": 300,
                "customer": 42,
                "customer_name": "Maria Lopez",
                "played_at": "2026-05-01T10:00:00Z",
                "prize_won": 1,
                "prize_name": "Free Drink",
                "prize_icon": "🥤",
                "is_claimed": false
            })]));
        })
        .await;
    let claim = app
        .server
        .mock_async(|when, then| {
            when.method(PATCH)
                .path("/api/spin-wheel/games/300/claim/")
                .json_body(json!({"notes": "At the bar"}));
            then.status(200).json_body(json!({
                "id": 300,
                "customer": 42,
                "customer_name": "Maria Lopez",
                "played_at": "2026-05-01T10:00:00Z",
                "prize_won": 1,
                "prize_name": "Free Drink",
                "prize_icon": "🥤",
                "is_claimed": true,
                "claimed_at": "2026-05-01T10:05:00Z",
                "notes": "At the bar"
            }));
        })
        .await;
    common::send(&app.router, Method::GET, "/spin-wheel", None).await;
    common::send(&app.router, Method::POST, "/spin-wheel/customer", Some(guest())).await;
    common::send(&app.router, Method::POST, "/spin-wheel/spin", None).await;

    let (status, body) = common::send(
        &app.router,
        Method::POST,
        "/spin-wheel/claim",
        Some(json!({"notes": "At the bar"})),
    )
    .await;

    claim.assert_async().await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["is_claimed"], true);
}
