// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login / registration screen.

use crate::error::{AppError, Result};
use crate::models::{RegisterRequest, User};
use crate::services::AuthService;
use serde::{Deserialize, Serialize};

const FILL_ALL_FIELDS: &str = "Please fill in all fields";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

impl RegisterForm {
    /// Validate and turn the form into the API payload. `clock_millis`
    /// supplies the uniqueness suffix of the generated username.
    pub fn to_request(&self, clock_millis: i64) -> Result<RegisterRequest> {
        if is_blank(&self.name) || is_blank(&self.email) || self.password.is_empty() {
            return Err(AppError::Validation(FILL_ALL_FIELDS.to_string()));
        }
        if self.password != self.confirm_password {
            return Err(AppError::Validation("Passwords do not match".to_string()));
        }

        let (first_name, last_name) = split_name(&self.name);
        Ok(RegisterRequest {
            username: generate_username(self.email.trim(), clock_millis),
            email: self.email.trim().to_string(),
            first_name,
            last_name,
            phone: None,
            password: self.password.clone(),
            password_confirm: self.password.clone(),
        })
    }
}

/// State of the auth screen.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AuthView {
    pub mode: AuthMode,
    pub is_loading: bool,
    pub error_message: String,
}

impl AuthView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        };
        self.error_message.clear();
    }

    /// Submit the login form. Nothing reaches the API unless both fields
    /// are filled in.
    pub async fn login(&mut self, auth: &AuthService, form: &LoginForm) -> Result<User> {
        if is_blank(&form.email) || form.password.is_empty() {
            return Err(self.fail(AppError::Validation(FILL_ALL_FIELDS.to_string())));
        }

        self.is_loading = true;
        self.error_message.clear();
        let result = auth.login(form.email.trim(), &form.password).await;
        self.is_loading = false;

        result.map_err(|e| {
            tracing::warn!(error = %e, "Login failed");
            self.error_message = "Login failed".to_string();
            e
        })
    }

    pub async fn register(&mut self, auth: &AuthService, form: &RegisterForm) -> Result<User> {
        let request = form
            .to_request(chrono::Utc::now().timestamp_millis())
            .map_err(|e| self.fail(e))?;

        self.is_loading = true;
        self.error_message.clear();
        let result = auth.register(&request).await;
        self.is_loading = false;

        result.map_err(|e| {
            tracing::warn!(error = %e, "Registration failed");
            self.error_message = "Registration failed".to_string();
            e
        })
    }

    fn fail(&mut self, err: AppError) -> AppError {
        self.error_message = err.user_message();
        err
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// First word is the first name, the rest the last name.
fn split_name(name: &str) -> (String, String) {
    let name = name.trim();
    match name.split_once(' ') {
        Some((first, rest)) => (first.to_string(), rest.trim().to_string()),
        None => (name.to_string(), String::new()),
    }
}

/// Username from the e-mail local part plus the last four digits of the
/// millisecond clock.
pub fn generate_username(email: &str, clock_millis: i64) -> String {
    let local = email.split('@').next().unwrap_or_default();

    let replaced: String = local
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '@' | '.' | '_' | '+' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let mut collapsed = String::with_capacity(replaced.len());
    for c in replaced.chars() {
        if c == '_' && collapsed.ends_with('_') {
            continue;
        }
        collapsed.push(c);
    }
    let mut username = collapsed.trim_matches('_').to_string();

    if username.chars().count() < 3 {
        username = format!("user_{}", username);
    }

    let clock = clock_millis.unsigned_abs().to_string();
    let suffix = &clock[clock.len().saturating_sub(4)..];
    format!("{}_{}", username, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_username() {
        assert_eq!(
            generate_username("maria.lopez@hotel.test", 1_760_000_001_234),
            "maria.lopez_1234"
        );
        assert_eq!(generate_username("a b!!c@x.io", 98_765), "a_b_c_8765");
        assert_eq!(generate_username("jo@x.io", 42), "user_jo_42");
        assert_eq!(generate_username("__@x.io", 5555), "user__5555");
    }

    #[test]
    fn test_split_name() {
        assert_eq!(
            split_name("Maria del Carmen"),
            ("Maria".to_string(), "del Carmen".to_string())
        );
        assert_eq!(split_name("Cher"), ("Cher".to_string(), String::new()));
    }

    #[test]
    fn test_register_form_validation() {
        let mut form = RegisterForm {
            name: "Maria Lopez".into(),
            email: "maria@hotel.test".into(),
            password: "s3cret".into(),
            confirm_password: "other".into(),
        };
        let err = form.to_request(0).unwrap_err();
        assert_eq!(err.to_string(), "Passwords do not match");

        form.confirm_password = "s3cret".into();
        let request = form.to_request(1_234_567).unwrap();
        assert_eq!(request.first_name, "Maria");
        assert_eq!(request.last_name, "Lopez");
        assert_eq!(request.password_confirm, "s3cret");
        assert_eq!(request.username, "maria_4567");

        form.name = "  ".into();
        assert_eq!(
            form.to_request(0).unwrap_err().to_string(),
            "Please fill in all fields"
        );
    }

    #[test]
    fn test_toggle_mode_clears_error() {
        let mut view = AuthView::new();
        view.error_message = "Login failed".into();
        view.toggle_mode();
        assert_eq!(view.mode, AuthMode::Register);
        assert!(view.error_message.is_empty());
    }
}
