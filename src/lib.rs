// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Frontdesk: the staff dashboard of a hotel.
//!
//! This crate serves the dashboard screens (special dates, offers and the
//! spin-wheel game) on top of the hotel's REST API, and keeps the signed-in
//! operator's session on disk.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod session;
pub mod time_utils;
pub mod views;

use config::Config;
use services::Services;
use session::SessionStore;
use views::Views;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub session: SessionStore,
    pub services: Services,
    pub views: Views,
}

impl AppState {
    /// Wire the services to `session` using the endpoints in `config`.
    pub fn new(config: Config, session: SessionStore) -> Self {
        let services = Services::new(&config, session.clone());
        Self {
            config,
            session,
            services,
            views: Views::new(),
        }
    }
}
