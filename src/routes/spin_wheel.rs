// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Spin-wheel routes. Public: guests play at the desk without an
//! operator session.

use crate::error::Result;
use crate::models::SpinWheelGame;
use crate::views::spin_wheel::SpinWheelSnapshot;
use crate::views::CustomerForm;
use crate::AppState;
use axum::{extract::State, routing::get, routing::post, Json, Router};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/spin-wheel", get(show))
        .route("/spin-wheel/prizes/reload", post(reload_prizes))
        .route("/spin-wheel/customer", post(register_customer))
        .route("/spin-wheel/spin", post(spin))
        .route("/spin-wheel/play-again", post(play_again))
        .route("/spin-wheel/new-customer", post(new_customer))
        .route("/spin-wheel/claim", post(claim_prize))
}

#[derive(Deserialize, Default)]
pub struct ClaimForm {
    #[serde(default)]
    pub notes: Option<String>,
}

/// Current state; prizes are fetched on the first visit.
async fn show(State(state): State<Arc<AppState>>) -> Result<Json<SpinWheelSnapshot>> {
    let mut view = state.views.spin_wheel.lock().await;
    if !view.prizes_loaded {
        view.load_prizes(&state.services).await?;
    }
    Ok(Json(view.snapshot()))
}

async fn reload_prizes(State(state): State<Arc<AppState>>) -> Result<Json<SpinWheelSnapshot>> {
    let mut view = state.views.spin_wheel.lock().await;
    view.load_prizes(&state.services).await?;
    Ok(Json(view.snapshot()))
}

async fn register_customer(
    State(state): State<Arc<AppState>>,
    Json(form): Json<CustomerForm>,
) -> Result<Json<SpinWheelSnapshot>> {
    let mut view = state.views.spin_wheel.lock().await;
    let admission = view.register_customer(&state.services, form).await?;
    tracing::debug!(?admission, "Customer presented to the wheel");
    Ok(Json(view.snapshot()))
}

async fn spin(State(state): State<Arc<AppState>>) -> Result<Json<SpinWheelSnapshot>> {
    let mut view = state.views.spin_wheel.lock().await;
    view.spin(&state.services).await?;
    Ok(Json(view.snapshot()))
}

async fn play_again(State(state): State<Arc<AppState>>) -> Result<Json<SpinWheelSnapshot>> {
    let mut view = state.views.spin_wheel.lock().await;
    view.play_again()?;
    Ok(Json(view.snapshot()))
}

async fn new_customer(State(state): State<Arc<AppState>>) -> Json<SpinWheelSnapshot> {
    let mut view = state.views.spin_wheel.lock().await;
    view.start_new_customer();
    Json(view.snapshot())
}

async fn claim_prize(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ClaimForm>,
) -> Result<Json<SpinWheelGame>> {
    let mut view = state.views.spin_wheel.lock().await;
    let game = view
        .claim_prize(&state.services, form.notes.as_deref())
        .await?;
    Ok(Json(game))
}
