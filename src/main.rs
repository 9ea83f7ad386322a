// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Frontdesk dashboard server
//!
//! Serves the hotel staff dashboard on top of the hotel REST API.

use frontdesk::{
    config::Config,
    session::{FileStorage, SessionStore},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(
        port = config.port,
        api = %config.api_base_url,
        "Starting Frontdesk"
    );

    // Restore the operator session, if one was saved
    let storage = FileStorage::new(config.session_file.clone());
    tracing::info!(path = %storage.path().display(), "Using session file");
    let session = SessionStore::open(Arc::new(storage));
    if let Some(user) = session.current_user() {
        tracing::info!(user_id = %user.id, "Restored operator session");
    }

    // Build shared state
    let state = Arc::new(AppState::new(config.clone(), session));

    // Build router
    let app = frontdesk::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    for directive in ["frontdesk=debug", "info"] {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::registry().with(filter).with(format).init();
}
