// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login and registration screen.

use crate::error::Result;
use crate::models::User;
use crate::routes::HOME_PATH;
use crate::views::{AuthView, LoginForm, RegisterForm};
use crate::AppState;
use axum::{extract::State, routing::get, routing::post, Json, Router};
use serde::Serialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth", get(show))
        .route("/auth/mode", post(toggle_mode))
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
}

/// Signed-in operator and where to go next.
#[derive(Serialize)]
pub struct SessionResponse {
    pub user: User,
    pub redirect_to: &'static str,
}

async fn show(State(state): State<Arc<AppState>>) -> Json<AuthView> {
    Json(state.views.auth.lock().await.clone())
}

async fn toggle_mode(State(state): State<Arc<AppState>>) -> Json<AuthView> {
    let mut view = state.views.auth.lock().await;
    view.toggle_mode();
    Json(view.clone())
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(form): Json<LoginForm>,
) -> Result<Json<SessionResponse>> {
    let mut view = state.views.auth.lock().await;
    let user = view.login(&state.services.auth, &form).await?;
    *view = AuthView::new();
    drop(view);

    tracing::info!(user_id = %user.id, "Operator logged in");
    state.views.reset_operator_screens().await;
    Ok(Json(SessionResponse {
        user,
        redirect_to: HOME_PATH,
    }))
}

async fn register(
    State(state): State<Arc<AppState>>,
    Json(form): Json<RegisterForm>,
) -> Result<Json<SessionResponse>> {
    let mut view = state.views.auth.lock().await;
    let user = view.register(&state.services.auth, &form).await?;
    *view = AuthView::new();
    drop(view);

    tracing::info!(user_id = %user.id, "Operator registered");
    state.views.reset_operator_screens().await;
    Ok(Json(SessionResponse {
        user,
        redirect_to: HOME_PATH,
    }))
}
