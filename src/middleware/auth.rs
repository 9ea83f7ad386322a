// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session gate for the operator screens.

use crate::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;

/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/auth";

/// Signed-in operator, available to handlers behind [`require_session`].
#[derive(Debug, Clone)]
pub struct Operator {
    pub user_id: String,
}

/// Middleware that lets the request through only while someone is signed
/// in, and redirects to the login screen otherwise.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(user) = state.session.current_user() else {
        tracing::debug!(path = %request.uri().path(), "No session, redirecting to login");
        return Redirect::to(LOGIN_PATH).into_response();
    };

    request.extensions_mut().insert(Operator { user_id: user.id });
    next.run(request).await
}
