// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Special-dates screen routes.

use crate::error::Result;
use crate::time_utils::today;
use crate::views::events::EventsSnapshot;
use crate::views::{CustomerForm, SpecialDateForm, WishForm, WishOutcome};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/events", get(show))
        .route("/events/reload", post(reload))
        .route("/events/filter", put(set_filter))
        .route("/events/special-dates", post(create_special_date))
        .route(
            "/events/special-dates/{id}",
            put(update_special_date).delete(delete_special_date),
        )
        .route("/events/special-dates/{id}/wish", post(send_wish))
        .route("/events/wish-all", post(send_wish_to_all))
        .route("/events/customers", post(add_customer))
}

#[derive(Deserialize)]
pub struct FilterRequest {
    #[serde(default)]
    pub filter: String,
}

async fn show(State(state): State<Arc<AppState>>) -> Result<Json<EventsSnapshot>> {
    reload(State(state)).await
}

async fn reload(State(state): State<Arc<AppState>>) -> Result<Json<EventsSnapshot>> {
    let mut view = state.views.events.lock().await;
    view.load(&state.services).await?;
    Ok(Json(view.snapshot(today())))
}

async fn set_filter(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FilterRequest>,
) -> Json<EventsSnapshot> {
    let mut view = state.views.events.lock().await;
    view.set_filter(&request.filter);
    Json(view.snapshot(today()))
}

async fn create_special_date(
    State(state): State<Arc<AppState>>,
    Json(form): Json<SpecialDateForm>,
) -> Result<Json<EventsSnapshot>> {
    let mut view = state.views.events.lock().await;
    view.create_special_date(&state.services, form).await?;
    Ok(Json(view.snapshot(today())))
}

async fn update_special_date(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(form): Json<SpecialDateForm>,
) -> Result<Json<EventsSnapshot>> {
    let mut view = state.views.events.lock().await;
    view.update_special_date(&state.services, &id, form).await?;
    Ok(Json(view.snapshot(today())))
}

async fn delete_special_date(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<EventsSnapshot>> {
    let mut view = state.views.events.lock().await;
    view.delete_special_date(&state.services, &id).await?;
    Ok(Json(view.snapshot(today())))
}

async fn send_wish(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(wish): Json<WishForm>,
) -> Result<Json<WishOutcome>> {
    let mut view = state.views.events.lock().await;
    let outcome = view.send_wish(&state.services, &id, wish).await?;
    Ok(Json(outcome))
}

async fn send_wish_to_all(State(state): State<Arc<AppState>>) -> Json<EventsSnapshot> {
    let mut view = state.views.events.lock().await;
    let today = today();
    view.send_wish_to_all(today);
    Json(view.snapshot(today))
}

async fn add_customer(
    State(state): State<Arc<AppState>>,
    Json(form): Json<CustomerForm>,
) -> Result<Json<EventsSnapshot>> {
    let mut view = state.views.events.lock().await;
    view.add_customer(&state.services, form).await?;
    Ok(Json(view.snapshot(today())))
}
