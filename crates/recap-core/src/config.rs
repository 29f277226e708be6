//! Configuration module
//!
//! Environment-driven settings for the client. The HTTP timeout lives here
//! because the workflow layer defines no timeouts of its own; a hung request
//! is bounded by the HTTP client, not by the callers.

use std::env;

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
/// Refresh the token when it expires within this window, so a request never
/// leaves with a credential about to lapse mid-flight.
pub const TOKEN_EXPIRY_LEEWAY_SECS: i64 = 30;

/// Client configuration
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL of the backend HTTP API (the API gateway).
    pub api_base_url: String,
    pub request_timeout_secs: u64,
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    /// Create from environment: RECAP_API_URL (or API_URL), and optionally
    /// RECAP_REQUEST_TIMEOUT_SECS.
    pub fn from_env() -> Self {
        let api_base_url = env::var("RECAP_API_URL")
            .or_else(|_| env::var("API_URL"))
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        let request_timeout_secs = env::var("RECAP_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| parse_timeout_secs(&v))
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        Self {
            api_base_url,
            request_timeout_secs,
        }
    }
}

fn parse_timeout_secs(value: &str) -> Option<u64> {
    match value.trim().parse::<u64>() {
        Ok(0) | Err(_) => None,
        Ok(secs) => Some(secs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_applies_default_timeout() {
        let config = ClientConfig::new("https://api.example.com");
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn timeout_parsing_rejects_zero_and_garbage() {
        assert_eq!(parse_timeout_secs("30"), Some(30));
        assert_eq!(parse_timeout_secs(" 45 "), Some(45));
        assert_eq!(parse_timeout_secs("0"), None);
        assert_eq!(parse_timeout_secs("soon"), None);
    }
}
