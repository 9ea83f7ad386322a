// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use frontdesk::config::Config;
use frontdesk::models::User;
use frontdesk::routes::create_router;
use frontdesk::session::SessionStore;
use frontdesk::AppState;
use httpmock::MockServer;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

pub const TOKEN: &str = "tok-123";

/// App wired to a mock hotel API.
#[allow(dead_code)]
pub struct TestApp {
    pub server: MockServer,
    pub router: axum::Router,
    pub state: Arc<AppState>,
}

/// Create a test app with no operator signed in.
#[allow(dead_code)]
pub async fn create_test_app() -> TestApp {
    let server = MockServer::start_async().await;
    let config = Config::for_api(&server.url("/api"));
    let state = Arc::new(AppState::new(config, SessionStore::in_memory()));

    TestApp {
        router: create_router(state.clone()),
        server,
        state,
    }
}

/// Create a test app with an operator already signed in.
#[allow(dead_code)]
pub async fn create_signed_in_app() -> TestApp {
    let app = create_test_app().await;
    app.state
        .session
        .establish(test_user(), TOKEN.to_string())
        .unwrap();
    app
}

#[allow(dead_code)]
pub fn test_user() -> User {
    serde_json::from_value(user_json()).unwrap()
}

#[allow(dead_code)]
pub fn user_json() -> Value {
    json!({
        "id": 1,
        "username": "maria_1234",
        "email": "maria@hotel.test",
        "first_name": "Maria",
        "last_name": "Lopez",
        "date_joined": "2026-01-01T00:00:00Z"
    })
}

#[allow(dead_code)]
pub fn customer_json(id: u64, name: &str, phone: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": null,
        "phone": phone,
        "birth_date": "1990-04-12",
        "created_at": "2026-01-01T00:00:00Z",
        "updated_at": "2026-01-01T00:00:00Z"
    })
}

#[allow(dead_code)]
pub fn special_date_json(id: u64, customer: u64, kind: &str, date: &str) -> Value {
    json!({
        "id": id,
        "customer": customer,
        "customer_name": "Maria Lopez",
        "customer_phone": "555-1234",
        "special_date_type": kind,
        "date": date,
        "notes": null,
        "created_at": "2026-01-01T00:00:00Z",
        "updated_at": "2026-01-01T00:00:00Z"
    })
}

#[allow(dead_code)]
pub fn page(results: Vec<Value>) -> Value {
    json!({
        "count": results.len(),
        "next": null,
        "previous": null,
        "results": results
    })
}

#[allow(dead_code)]
pub fn offer_json(id: u64, status: &str, discount: Value) -> Value {
    json!({
        "id": id,
        "title": format!("Offer {}", id),
        "description": "Something nice",
        "offer_type": "percentage",
        "discount_value": discount,
        "status": status,
        "valid_from": "2026-01-01",
        "valid_to": "2026-12-31",
        "max_usage": null,
        "current_usage": 0,
        "is_valid": true,
        "is_available": true
    })
}

#[allow(dead_code)]
pub fn prize_json(id: u64, name: &str, icon: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("{} for you", name),
        "icon": icon,
        "probability": 30,
        "is_active": true
    })
}

/// Send a request through the router and decode the JSON body (`Null`
/// when the body is empty).
#[allow(dead_code)]
pub async fn send(
    router: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let response = send_raw(router, method, uri, body).await;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[allow(dead_code)]
pub async fn send_raw(
    router: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> axum::response::Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    router.clone().oneshot(request).await.unwrap()
}
