// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard landing screen and logout.

use crate::error::{AppError, Result};
use crate::middleware::auth::{Operator, LOGIN_PATH};
use crate::views::DashboardView;
use crate::AppState;
use axum::{extract::State, routing::get, routing::post, Extension, Json, Router};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Protected; the session gate is applied in routes/mod.rs.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard", get(show))
        .route("/dashboard/logout", post(logout))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LogoutResponse {
    pub redirect_to: String,
    /// Set when the hotel API could not be told; the local session is
    /// gone either way.
    pub remote_error: Option<String>,
}

async fn show(State(state): State<Arc<AppState>>) -> Json<DashboardView> {
    Json(DashboardView::for_user(state.session.current_user()))
}

async fn logout(
    State(state): State<Arc<AppState>>,
    Extension(operator): Extension<Operator>,
) -> Result<Json<LogoutResponse>> {
    let remote_error = match state.services.auth.logout().await {
        Ok(()) => None,
        Err(AppError::Api(message)) => Some(message),
        Err(e) => {
            tracing::error!(error = %e, "Failed to clear stored session");
            return Err(e);
        }
    };

    state.views.reset_operator_screens().await;
    tracing::info!(user_id = %operator.user_id, "Operator logged out");

    Ok(Json(LogoutResponse {
        redirect_to: LOGIN_PATH.to_string(),
        remote_error,
    }))
}
