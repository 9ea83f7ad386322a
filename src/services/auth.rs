// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Staff login, registration and logout against the hotel auth endpoints.

use crate::error::Result;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, User};
use crate::services::api::ApiClient;
use crate::session::SessionStore;

/// Auth endpoints plus the session they feed.
#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    /// `client` must be bound to the auth base URL (`.../api/auth`).
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn session(&self) -> &SessionStore {
        self.client.session()
    }

    /// Log in; on success the session is persisted and published.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response: AuthResponse = self.client.post_anonymous("/login/", &request).await?;
        self.accept(response)
    }

    /// Register a new staff account and log in as it.
    pub async fn register(&self, request: &RegisterRequest) -> Result<User> {
        let response: AuthResponse = self.client.post_anonymous("/register/", request).await?;
        self.accept(response)
    }

    /// Log out. Local state is cleared even when the remote call fails;
    /// the remote failure is still returned to the caller.
    pub async fn logout(&self) -> Result<()> {
        let remote = if self.session().token().is_some() {
            self.client
                .post_discard("/logout/", &serde_json::json!({}))
                .await
        } else {
            Ok(())
        };

        let local = self.session().clear();

        if let Err(e) = &remote {
            tracing::warn!(error = %e, "Remote logout failed; local session cleared anyway");
        }

        local.and(remote)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }

    pub fn current_user(&self) -> Option<User> {
        self.session().current_user()
    }

    fn accept(&self, response: AuthResponse) -> Result<User> {
        let user = response.user.clone();
        self.session().establish(response.user, response.token)?;
        Ok(user)
    }
}
