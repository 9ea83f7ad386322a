// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required form field is missing or malformed. Raised before any
    /// request reaches the hotel API.
    #[error("{0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Any failed call to the hotel API (transport, non-2xx, bad JSON).
    #[error("Hotel API error: {0}")]
    Api(String),

    #[error("Session storage error: {0}")]
    Storage(String),

    /// A bug on this side, such as a value that cannot be encoded.
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Message suitable for an inline error banner.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::Api(_) => "The hotel service could not complete the request".to_string(),
            AppError::Storage(_) | AppError::Internal(_) => "Something went wrong".to_string(),
        }
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Validation(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                Some(msg.clone()),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", Some(msg.clone())),
            AppError::Api(msg) => {
                tracing::warn!(error = %msg, "Hotel API error");
                (StatusCode::BAD_GATEWAY, "api_error", Some(msg.clone()))
            }
            AppError::Storage(msg) => {
                tracing::error!(error = %msg, "Session storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, "storage_error", None)
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_shown_verbatim() {
        let err = AppError::Validation("Please fill in all fields".to_string());
        assert_eq!(err.user_message(), "Please fill in all fields");
        assert_eq!(err.to_string(), "Please fill in all fields");
    }

    #[test]
    fn test_internal_details_stay_private() {
        let err = AppError::from(anyhow::anyhow!("encode current user"));
        assert_eq!(err.user_message(), "Something went wrong");
        assert!(err.to_string().contains("encode current user"));
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (
                AppError::Validation("x".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::Api("HTTP 500".into()), StatusCode::BAD_GATEWAY),
            (
                AppError::Storage("disk".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::from(anyhow::anyhow!("encode user")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
