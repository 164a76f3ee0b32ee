use chrono::Duration;
use jsonwebtoken::Algorithm;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum TokenConfigError {
    #[error("token_config.empty_secret")]
    EmptySecret,
    #[error("token_config.unsupported_algorithm: {0}")]
    UnsupportedAlgorithm(String),
    #[error("token_config.invalid_ttl")]
    InvalidTtl,
}

/// Signing parameters for access tokens. Immutable once built.
#[derive(Clone)]
pub struct TokenConfig {
    pub secret_key: String,
    pub algorithm: Algorithm,
    pub access_token_ttl: Duration,
}

impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret_key", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("access_token_ttl", &self.access_token_ttl)
            .finish()
    }
}

impl TokenConfig {
    pub fn new(
        secret_key: String,
        algorithm: &str,
        access_token_ttl_minutes: i64,
    ) -> Result<Self, TokenConfigError> {
        if secret_key.is_empty() {
            return Err(TokenConfigError::EmptySecret);
        }
        if access_token_ttl_minutes <= 0 {
            return Err(TokenConfigError::InvalidTtl);
        }
        Ok(Self {
            secret_key,
            algorithm: parse_hmac_algorithm(algorithm)?,
            access_token_ttl: Duration::minutes(access_token_ttl_minutes),
        })
    }
}

/// Only shared-secret algorithms are accepted: the service signs and verifies
/// with the same key.
fn parse_hmac_algorithm(name: &str) -> Result<Algorithm, TokenConfigError> {
    match name.trim().to_ascii_uppercase().as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        _ => Err(TokenConfigError::UnsupportedAlgorithm(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_config_for_hmac_algorithm() {
        let config = TokenConfig::new("secret".to_string(), "hs512", 30).unwrap();

        assert_eq!(config.algorithm, Algorithm::HS512);
        assert_eq!(config.access_token_ttl, Duration::minutes(30));
    }

    #[test]
    fn should_reject_asymmetric_algorithm() {
        let result = TokenConfig::new("secret".to_string(), "RS256", 30);

        assert_eq!(
            result.unwrap_err(),
            TokenConfigError::UnsupportedAlgorithm("RS256".to_string())
        );
    }

    #[test]
    fn should_reject_empty_secret() {
        let result = TokenConfig::new(String::new(), "HS256", 30);

        assert_eq!(result.unwrap_err(), TokenConfigError::EmptySecret);
    }

    #[test]
    fn should_reject_non_positive_ttl() {
        let result = TokenConfig::new("secret".to_string(), "HS256", 0);

        assert_eq!(result.unwrap_err(), TokenConfigError::InvalidTtl);
    }

    #[test]
    fn should_not_print_secret() {
        let config = TokenConfig::new("top-secret".to_string(), "HS256", 30).unwrap();

        assert!(!format!("{:?}", config).contains("top-secret"));
    }
}
