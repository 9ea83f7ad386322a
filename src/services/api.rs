// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP client for the hotel REST API.
//!
//! Every request carries `Authorization: Token <token>` (when a session
//! exists) and `Content-Type: application/json`. Failures of any kind are
//! reported as [`AppError::Api`]; nothing is retried.

use crate::error::AppError;
use crate::models::Listing;
use crate::session::SessionStore;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Hotel API client bound to one base URL.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    /// Create a client for `base_url` (e.g. `https://host/api`).
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        Self::with_http(reqwest::Client::new(), base_url, session)
    }

    /// Create a client sharing an existing connection pool.
    pub fn with_http(
        http: reqwest::Client,
        base_url: impl Into<String>,
        session: SessionStore,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// GET `endpoint` and decode the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, AppError> {
        let response = self.send(Method::GET, endpoint, None::<&()>, true).await?;
        check_response_json(response).await
    }

    /// GET a collection endpoint, paginated or not, and return its items.
    pub async fn list<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<T>, AppError> {
        let listing: Listing<T> = self.get(endpoint).await?;
        Ok(listing.into_results())
    }

    /// POST a JSON body and decode the JSON reply.
    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(Method::POST, endpoint, Some(body), true).await?;
        check_response_json(response).await
    }

    /// POST a JSON body without the session token.
    pub async fn post_anonymous<T, B>(&self, endpoint: &str, body: &B) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(Method::POST, endpoint, Some(body), false).await?;
        check_response_json(response).await
    }

    /// POST a JSON body, ignoring whatever the server replies with.
    pub async fn post_discard<B>(&self, endpoint: &str, body: &B) -> Result<(), AppError>
    where
        B: Serialize + ?Sized,
    {
        let response = self.send(Method::POST, endpoint, Some(body), true).await?;
        check_response(response).await
    }

    pub async fn put<T, B>(&self, endpoint: &str, body: &B) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(Method::PUT, endpoint, Some(body), true).await?;
        check_response_json(response).await
    }

    pub async fn patch<T, B>(&self, endpoint: &str, body: &B) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(Method::PATCH, endpoint, Some(body), true).await?;
        check_response_json(response).await
    }

    /// DELETE `endpoint`. The API replies 204 with no body.
    pub async fn delete(&self, endpoint: &str) -> Result<(), AppError> {
        let response = self.send(Method::DELETE, endpoint, None::<&()>, true).await?;
        check_response(response).await
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn send<B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
        authenticated: bool,
    ) -> Result<reqwest::Response, AppError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(endpoint);
        tracing::debug!(method = %method, url = %url, "Hotel API request");

        let mut request = self
            .http
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");

        if authenticated {
            if let Some(token) = self.session.token() {
                request = request.header(AUTHORIZATION, format!("Token {}", token));
            }
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        request
            .send()
            .await
            .map_err(|e| AppError::Api(format!("request to {} failed: {}", endpoint, e)))
    }
}

/// Check response status and return error if not successful.
async fn check_response(response: reqwest::Response) -> Result<(), AppError> {
    if response.status().is_success() {
        return Ok(());
    }
    Err(status_error(response).await)
}

/// Check response and parse JSON body.
async fn check_response_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, AppError> {
    if !response.status().is_success() {
        return Err(status_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| AppError::Api(format!("JSON parse error: {}", e)))
}

async fn status_error(response: reqwest::Response) -> AppError {
    let status = response.status();
    let url = response.url().path().to_string();
    let body = response.text().await.unwrap_or_default();
    tracing::warn!(status = status.as_u16(), path = %url, "Hotel API returned an error");
    AppError::Api(format!("HTTP {}: {}", status, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use httpmock::prelude::*;
    use serde_json::json;

    fn logged_in_store() -> SessionStore {
        let store = SessionStore::in_memory();
        store
            .establish(
                User {
                    id: "1".into(),
                    username: "desk".into(),
                    email: "desk@hotel.test".into(),
                    first_name: String::new(),
                    last_name: String::new(),
                    phone: None,
                    date_joined: String::new(),
                },
                "secret-token".into(),
            )
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_get_sends_token_header() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/offers/offers/stats/")
                    .header("authorization", "Token secret-token")
                    .header("content-type", "application/json");
                then.status(200).json_body(json!({
                    "total_offers": 3, "active_offers": 2,
                    "expired_offers": 1, "total_usage": 9
                }));
            })
            .await;

        let client = ApiClient::new(server.url("/api"), logged_in_store());
        let stats: crate::models::OfferStats =
            client.get("/offers/offers/stats/").await.unwrap();

        mock.assert_async().await;
        assert_eq!(stats.total_usage, 9);
    }

    #[tokio::test]
    async fn test_no_token_header_without_session() {
        let server = MockServer::start_async().await;
        let with_header = server
            .mock_async(|when, then| {
                when.method(GET).path("/x/").header_exists("authorization");
                then.status(500);
            })
            .await;
        let without_header = server
            .mock_async(|when, then| {
                when.method(GET).path("/x/");
                then.status(200).json_body(json!([]));
            })
            .await;

        let client = ApiClient::new(server.base_url(), SessionStore::in_memory());
        let items: Vec<serde_json::Value> = client.get("/x/").await.unwrap();

        assert!(items.is_empty());
        assert_eq!(with_header.calls_async().await, 0);
        assert_eq!(without_header.calls_async().await, 1);
    }

    #[tokio::test]
    async fn test_error_status_becomes_api_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/customers/customers/9/");
                then.status(404).body("{\"detail\":\"Not found.\"}");
            })
            .await;

        let client = ApiClient::new(server.base_url(), logged_in_store());
        let err = client.delete("/customers/customers/9/").await.unwrap_err();

        match err {
            AppError::Api(msg) => assert!(msg.contains("404"), "unexpected message: {msg}"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server_is_api_error() {
        let client = ApiClient::new("http://127.0.0.1:9", SessionStore::in_memory());
        let result: Result<serde_json::Value, _> = client.get("/anything/").await;
        assert!(matches!(result, Err(AppError::Api(_))));
    }
}
