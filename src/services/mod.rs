// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - typed facades over the hotel REST API.

pub mod api;
pub mod auth;
pub mod customers;
pub mod events;
pub mod messaging;
pub mod offers;
pub mod spin_wheel;

pub use api::ApiClient;
pub use auth::AuthService;
pub use customers::CustomerService;
pub use events::EventsService;
pub use messaging::MessagingService;
pub use offers::OffersService;
pub use spin_wheel::SpinWheelService;

use crate::config::Config;
use crate::session::SessionStore;

/// Every domain service, sharing one connection pool and session.
#[derive(Clone)]
pub struct Services {
    pub auth: AuthService,
    pub customers: CustomerService,
    pub events: EventsService,
    pub offers: OffersService,
    pub spin_wheel: SpinWheelService,
    pub messaging: MessagingService,
}

impl Services {
    pub fn new(config: &Config, session: SessionStore) -> Self {
        let http = reqwest::Client::new();
        let api = ApiClient::with_http(http.clone(), &config.api_base_url, session.clone());
        let auth_api = ApiClient::with_http(http, &config.auth_api_url, session);

        Self {
            auth: AuthService::new(auth_api),
            customers: CustomerService::new(api.clone()),
            events: EventsService::new(api.clone()),
            offers: OffersService::new(api.clone()),
            spin_wheel: SpinWheelService::new(api.clone()),
            messaging: MessagingService::new(api, config.hotel_name.clone()),
        }
    }
}
