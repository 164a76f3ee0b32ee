use chrono::Duration;

use super::errors::AuthError;
use super::model::{AccessClaims, AccessToken};

/// Issues and validates stateless bearer tokens.
///
/// Tokens are never stored: their lifecycle is issued, valid, then expired
/// once `exp` passes. There is no revocation.
pub trait TokenService: Send + Sync {
    /// Signs a token for `subject_id`. `ttl` overrides the configured default.
    fn issue(
        &self,
        subject_id: i64,
        email: Option<String>,
        ttl: Option<Duration>,
    ) -> Result<AccessToken, AuthError>;

    fn validate(&self, token: &str) -> Result<AccessClaims, AuthError>;
}
