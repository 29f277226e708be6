use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Opaque bearer credential with a finite validity window.
///
/// Owned exclusively by the credential provider; all other components borrow
/// the current token read-only for the duration of one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BearerToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl BearerToken {
    pub fn new(token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            expires_at,
        }
    }

    /// Whether the token expires within `leeway_secs` from now. Requests are
    /// dispatched only with tokens that pass this check, so a token that is
    /// about to lapse is refreshed rather than sent.
    pub fn is_expired(&self, leeway_secs: i64) -> bool {
        Utc::now() + Duration::seconds(leeway_secs) >= self.expires_at
    }
}

/// Identity of the signed-in user, as returned by the external identity
/// service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub username: String,
    pub email: String,
    pub token: BearerToken,
}

/// Discrete auth events emitted by the identity service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn,
    SignedOut,
}
