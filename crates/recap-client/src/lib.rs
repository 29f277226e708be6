//! HTTP client for the Recap backend.
//!
//! Provides the credential provider (bearer token with transparent refresh),
//! an `ApiClient` with the backend's domain methods (pre-signed URL, direct
//! storage PUT, catalog listing, summary fetch), and the session controller
//! that owns client-visible state. The CLI uses these pieces directly.

pub mod api;
pub mod auth;
pub mod catalog;
pub mod controller;
pub mod upload;

use std::sync::Arc;
use std::time::Duration;

use recap_core::{AppError, AuthEvent, ClientConfig};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::sync::broadcast;

use crate::auth::{CredentialProvider, IdentityProvider};

/// Why a single request failed, before it is mapped into the per-operation
/// error variant at the call site. Auth failures pass through unmapped: a
/// missing session is an `Auth` error no matter which operation tripped it.
#[derive(Debug)]
pub(crate) enum RequestFailure {
    Auth(AppError),
    Transport(reqwest::Error),
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

impl RequestFailure {
    pub(crate) fn into_operation_error(self, wrap: fn(String) -> AppError) -> AppError {
        match self {
            RequestFailure::Auth(err) => err,
            RequestFailure::Transport(err) => wrap(format!("request failed: {}", err)),
            RequestFailure::Status { status, body } => wrap(format!("status {}: {}", status, body)),
        }
    }
}

/// HTTP client for the Recap backend API with bearer auth.
///
/// The bearer header is acquired from the credential provider immediately
/// before each dispatch; callers never cache tokens.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    identity: Arc<dyn IdentityProvider>,
    credentials: Arc<CredentialProvider>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, identity: Arc<dyn IdentityProvider>) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        let credentials = Arc::new(CredentialProvider::new(identity.clone()));

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            identity,
            credentials,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Subscribe to the identity service's auth event stream.
    pub fn subscribe_auth_events(&self) -> broadcast::Receiver<AuthEvent> {
        self.identity.subscribe()
    }

    /// Drop the cached credential. Called on sign-out; the next request will
    /// have to obtain a fresh session or fail with an auth error.
    pub async fn clear_session(&self) {
        self.credentials.clear().await;
    }

    /// Authenticated GET with optional query parameters. Deserializes the
    /// JSON response. Non-success statuses surface the response body text.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, RequestFailure> {
        let auth_header = self
            .credentials
            .bearer_header()
            .await
            .map_err(RequestFailure::Auth)?;

        let url = self.build_url(path);
        let mut request = self.http.get(&url).header("Authorization", auth_header);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(RequestFailure::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RequestFailure::Status { status, body });
        }

        response.json().await.map_err(RequestFailure::Transport)
    }

    /// Raw client for requests outside the backend API (the storage PUT).
    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
}

// Re-export the main workflow types for convenience.
pub use auth::StaticIdentity;
pub use catalog::CatalogClient;
pub use controller::{SessionController, SessionState};
pub use upload::UploadClient;
