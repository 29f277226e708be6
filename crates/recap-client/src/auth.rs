//! Credential provider
//!
//! The identity service is an external collaborator reached through the
//! `IdentityProvider` trait: it returns the current authenticated user (with
//! a bearer token and expiry) and emits a discrete sign-in/sign-out event
//! stream. `CredentialProvider` sits on top and hands out `Bearer` headers,
//! refreshing the token transparently when it is missing or about to lapse.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use recap_core::config::TOKEN_EXPIRY_LEEWAY_SECS;
use recap_core::{AppError, AuthEvent, AuthenticatedUser, BearerToken};
use tokio::sync::{broadcast, Mutex};

/// Validity window for tokens minted by [`StaticIdentity`].
const STATIC_TOKEN_TTL_HOURS: i64 = 24;

/// External identity system: token issuance and the auth event stream.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Current signed-in user with a usable bearer token. The identity
    /// system refreshes expired tokens internally; an error means no
    /// session exists and the user must re-authenticate.
    async fn current_user(&self) -> Result<AuthenticatedUser, AppError>;

    /// Subscribe to sign-in/sign-out events.
    fn subscribe(&self) -> broadcast::Receiver<AuthEvent>;
}

/// Hands out `Bearer` headers for outbound requests.
///
/// The session token is owned here exclusively; callers borrow one header
/// per request and never cache it. A token within the expiry leeway is
/// replaced by re-querying the identity provider before the header is built.
pub struct CredentialProvider {
    identity: Arc<dyn IdentityProvider>,
    cached: Mutex<Option<BearerToken>>,
}

impl CredentialProvider {
    pub fn new(identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            identity,
            cached: Mutex::new(None),
        }
    }

    /// `Authorization` header value for one request. Fails with an auth
    /// error if no session exists or the token cannot be refreshed.
    pub async fn bearer_header(&self) -> Result<String, AppError> {
        let mut cached = self.cached.lock().await;

        let needs_refresh = cached
            .as_ref()
            .map_or(true, |token| token.is_expired(TOKEN_EXPIRY_LEEWAY_SECS));

        if needs_refresh {
            let user = self.identity.current_user().await?;
            *cached = Some(user.token);
        }

        match cached.as_ref() {
            Some(token) => Ok(format!("Bearer {}", token.token)),
            None => Err(AppError::Auth("no active session".to_string())),
        }
    }

    /// Forget the cached token. The session is destroyed on sign-out; the
    /// next request has to obtain a fresh one or fail.
    pub async fn clear(&self) {
        let mut cached = self.cached.lock().await;
        *cached = None;
    }
}

/// Identity provider backed by a fixed token, for non-interactive use (CLI,
/// tests). Events can be emitted manually to drive the session controller.
pub struct StaticIdentity {
    user: AuthenticatedUser,
    events: broadcast::Sender<AuthEvent>,
}

impl StaticIdentity {
    pub fn new(username: impl Into<String>, email: impl Into<String>, token: impl Into<String>) -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            user: AuthenticatedUser {
                username: username.into(),
                email: email.into(),
                token: BearerToken::new(
                    token,
                    Utc::now() + Duration::hours(STATIC_TOKEN_TTL_HOURS),
                ),
            },
            events,
        }
    }

    /// Create from environment: RECAP_TOKEN (required), RECAP_USERNAME and
    /// RECAP_EMAIL (optional).
    pub fn from_env() -> Result<Self, AppError> {
        let token = std::env::var("RECAP_TOKEN")
            .map_err(|_| AppError::Auth("Missing token. Set RECAP_TOKEN".to_string()))?;
        let username =
            std::env::var("RECAP_USERNAME").unwrap_or_else(|_| "recap-user".to_string());
        let email = std::env::var("RECAP_EMAIL").unwrap_or_default();

        Ok(Self::new(username, email, token))
    }

    pub fn username(&self) -> &str {
        &self.user.username
    }

    /// Emit an auth event to all subscribers.
    pub fn emit(&self, event: AuthEvent) {
        // Send only fails when there is no subscriber, which is fine.
        let _ = self.events.send(event);
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentity {
    async fn current_user(&self) -> Result<AuthenticatedUser, AppError> {
        Ok(AuthenticatedUser {
            token: BearerToken::new(
                self.user.token.token.clone(),
                Utc::now() + Duration::hours(STATIC_TOKEN_TTL_HOURS),
            ),
            ..self.user.clone()
        })
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bearer_header_formats_token() {
        let identity = Arc::new(StaticIdentity::new("alice", "alice@example.com", "tok-1"));
        let credentials = CredentialProvider::new(identity);
        assert_eq!(credentials.bearer_header().await.unwrap(), "Bearer tok-1");
    }

    #[tokio::test]
    async fn clear_then_header_refetches_from_identity() {
        let identity = Arc::new(StaticIdentity::new("alice", "alice@example.com", "tok-1"));
        let credentials = CredentialProvider::new(identity);

        credentials.bearer_header().await.unwrap();
        credentials.clear().await;
        // Static identity always has a session, so the header comes back.
        assert_eq!(credentials.bearer_header().await.unwrap(), "Bearer tok-1");
    }

    #[tokio::test]
    async fn emitted_events_reach_subscribers() {
        let identity = StaticIdentity::new("alice", "alice@example.com", "tok-1");
        let mut rx = identity.subscribe();
        identity.emit(AuthEvent::SignedIn);
        assert_eq!(rx.recv().await.unwrap(), AuthEvent::SignedIn);
    }
}
