//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local setups.

use std::env;
use std::path::PathBuf;

/// Default location of the hotel back-end API.
pub const DEFAULT_API_BASE_URL: &str = "https://hotel-booking-qpaa.onrender.com/api";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the hotel REST API (no trailing slash)
    pub api_base_url: String,
    /// Base URL of the hotel auth endpoints (login/register/logout)
    pub auth_api_url: String,
    /// File holding the persisted operator session
    pub session_file: PathBuf,
    /// Browser origin allowed by CORS
    pub frontend_url: String,
    /// Hotel name used to sign outgoing wishes
    pub hotel_name: String,
    /// Server port
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_base_url = env::var("API_BASE_URL")
            .map(|v| trim_base_url(&v))
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        if api_base_url.is_empty() {
            return Err(ConfigError::Invalid("API_BASE_URL", "must not be empty".into()));
        }

        let auth_api_url = env::var("AUTH_API_URL")
            .map(|v| trim_base_url(&v))
            .unwrap_or_else(|_| format!("{}/auth", api_base_url));

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", raw.clone()))?,
            Err(_) => 8080,
        };

        Ok(Self {
            api_base_url,
            auth_api_url,
            session_file: env::var("SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".frontdesk/session.json")),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:4200".to_string()),
            hotel_name: env::var("HOTEL_NAME").unwrap_or_else(|_| "our hotel".to_string()),
            port,
        })
    }

    /// Config pointing at a local API, for tests.
    pub fn test_default() -> Self {
        Self::for_api("http://127.0.0.1:9")
    }

    /// Config pointing at the given API base URL, for tests.
    pub fn for_api(api_base_url: &str) -> Self {
        let api_base_url = trim_base_url(api_base_url);
        Self {
            auth_api_url: format!("{}/auth", api_base_url),
            api_base_url,
            session_file: PathBuf::from("session.json"),
            frontend_url: "http://localhost:4200".to_string(),
            hotel_name: "Test Hotel".to_string(),
            port: 8080,
        }
    }
}

fn trim_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test touches the process environment so runs cannot interleave.
    #[test]
    fn test_config_from_env() {
        env::set_var("API_BASE_URL", "http://hotel.local/api/");
        env::remove_var("AUTH_API_URL");
        env::set_var("PORT", "9090");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.api_base_url, "http://hotel.local/api");
        assert_eq!(config.auth_api_url, "http://hotel.local/api/auth");
        assert_eq!(config.port, 9090);

        env::set_var("PORT", "not-a-port");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid("PORT", _))
        ));

        env::remove_var("PORT");
        env::remove_var("API_BASE_URL");
    }

    #[test]
    fn test_for_api_trims_trailing_slash() {
        let config = Config::for_api("http://127.0.0.1:1234/");
        assert_eq!(config.api_base_url, "http://127.0.0.1:1234");
        assert_eq!(config.auth_api_url, "http://127.0.0.1:1234/auth");
    }
}
