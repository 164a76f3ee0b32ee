use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use business::domain::auth::errors::AuthError;
use business::domain::auth::model::{AccessClaims, AccessToken};
use business::domain::auth::services::TokenService;

use crate::token_config::TokenConfig;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    exp: i64,
    iat: i64,
}

/// HMAC-signed JWT access tokens.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    header: Header,
    validation: Validation,
    default_ttl: Duration,
}

impl JwtTokenService {
    pub fn new(config: &TokenConfig) -> Self {
        let mut validation = Validation::new(config.algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(config.secret_key.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret_key.as_bytes()),
            header: Header::new(config.algorithm),
            validation,
            default_ttl: config.access_token_ttl,
        }
    }
}

impl TokenService for JwtTokenService {
    fn issue(
        &self,
        subject_id: i64,
        email: Option<String>,
        ttl: Option<Duration>,
    ) -> Result<AccessToken, AuthError> {
        let issued_at = Utc::now();
        let expires_at = issued_at + ttl.unwrap_or(self.default_ttl);
        let claims = Claims {
            sub: subject_id.to_string(),
            email,
            exp: expires_at.timestamp(),
            iat: issued_at.timestamp(),
        };

        let token = encode(&self.header, &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to sign access token: {e}");
            AuthError::Issuance
        })?;

        Ok(AccessToken::bearer(token, expires_at))
    }

    fn validate(&self, token: &str) -> Result<AccessClaims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            tracing::warn!("Access token rejected: {e}");
            AuthError::InvalidToken
        })?;

        let subject_id = data.claims.sub.parse::<i64>().map_err(|_| {
            tracing::warn!("Access token rejected: non-numeric subject");
            AuthError::InvalidToken
        })?;
        let expires_at =
            DateTime::<Utc>::from_timestamp(data.claims.exp, 0).ok_or(AuthError::InvalidToken)?;

        Ok(AccessClaims {
            subject_id,
            email: data.claims.email,
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(secret: &str) -> JwtTokenService {
        JwtTokenService::new(&TokenConfig::new(secret.to_string(), "HS256", 30).unwrap())
    }

    #[test]
    fn should_round_trip_subject_and_email() {
        let tokens = service("s3cret");

        let issued = tokens
            .issue(42, Some("grower@example.com".to_string()), None)
            .unwrap();
        let claims = tokens.validate(&issued.access_token).unwrap();

        assert_eq!(issued.token_type, "bearer");
        assert_eq!(claims.subject_id, 42);
        assert_eq!(claims.email.as_deref(), Some("grower@example.com"));
        assert_eq!(claims.expires_at.timestamp(), issued.expires_at.timestamp());
    }

    #[test]
    fn should_omit_email_when_not_given() {
        let tokens = service("s3cret");

        let issued = tokens.issue(7, None, None).unwrap();
        let claims = tokens.validate(&issued.access_token).unwrap();

        assert_eq!(claims.email, None);
    }

    #[test]
    fn should_use_configured_ttl_by_default() {
        let tokens = service("s3cret");
        let before = Utc::now();

        let issued = tokens.issue(1, None, None).unwrap();

        let lifetime = issued.expires_at - before;
        assert!(lifetime <= Duration::minutes(30) + Duration::seconds(1));
        assert!(lifetime >= Duration::minutes(29));
    }

    #[test]
    fn should_honour_ttl_override() {
        let tokens = service("s3cret");
        let before = Utc::now();

        let issued = tokens.issue(1, None, Some(Duration::minutes(5))).unwrap();

        assert!(issued.expires_at - before <= Duration::minutes(5) + Duration::seconds(1));
    }

    #[test]
    fn should_reject_expired_and_foreign_tokens_alike() {
        let tokens = service("s3cret");
        let expired = tokens
            .issue(1, None, Some(Duration::seconds(-60)))
            .unwrap();
        let foreign = service("someone-else")
            .issue(1, None, None)
            .unwrap();

        let expired_result = tokens.validate(&expired.access_token);
        let foreign_result = tokens.validate(&foreign.access_token);

        assert_eq!(expired_result, Err(AuthError::InvalidToken));
        assert_eq!(foreign_result, Err(AuthError::InvalidToken));
    }

    #[test]
    fn should_reject_malformed_token() {
        assert_eq!(
            service("s3cret").validate("not-a-jwt"),
            Err(AuthError::InvalidToken)
        );
    }

    #[test]
    fn should_reject_non_numeric_subject() {
        let claims = Claims {
            sub: "alice".to_string(),
            email: None,
            exp: (Utc::now() + Duration::minutes(5)).timestamp(),
            iat: Utc::now().timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"s3cret"),
        )
        .unwrap();

        assert_eq!(
            service("s3cret").validate(&token),
            Err(AuthError::InvalidToken)
        );
    }
}
