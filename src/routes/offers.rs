// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Offers screen routes.

use crate::error::Result;
use crate::routes::events::FilterRequest;
use crate::views::offers::OffersSnapshot;
use crate::views::OfferForm;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/offers", get(show).post(create_offer))
        .route("/offers/reload", post(reload))
        .route("/offers/filter", put(set_filter))
        .route("/offers/{id}", put(update_offer).delete(delete_offer))
        .route("/offers/{id}/toggle", post(toggle_status))
}

async fn show(State(state): State<Arc<AppState>>) -> Result<Json<OffersSnapshot>> {
    reload(State(state)).await
}

async fn reload(State(state): State<Arc<AppState>>) -> Result<Json<OffersSnapshot>> {
    let mut view = state.views.offers.lock().await;
    view.load(&state.services).await?;
    Ok(Json(view.snapshot()))
}

async fn set_filter(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FilterRequest>,
) -> Result<Json<OffersSnapshot>> {
    let mut view = state.views.offers.lock().await;
    view.set_filter(&request.filter)?;
    Ok(Json(view.snapshot()))
}

async fn create_offer(
    State(state): State<Arc<AppState>>,
    Json(form): Json<OfferForm>,
) -> Result<Json<OffersSnapshot>> {
    let mut view = state.views.offers.lock().await;
    view.create_offer(&state.services, form).await?;
    Ok(Json(view.snapshot()))
}

async fn update_offer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(form): Json<OfferForm>,
) -> Result<Json<OffersSnapshot>> {
    let mut view = state.views.offers.lock().await;
    view.update_offer(&state.services, &id, form).await?;
    Ok(Json(view.snapshot()))
}

async fn toggle_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<OffersSnapshot>> {
    let mut view = state.views.offers.lock().await;
    view.toggle_status(&state.services, &id).await?;
    Ok(Json(view.snapshot()))
}

async fn delete_offer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<OffersSnapshot>> {
    let mut view = state.views.offers.lock().await;
    view.delete_offer(&state.services, &id).await?;
    Ok(Json(view.snapshot()))
}
