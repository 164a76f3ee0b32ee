use anyhow::Context;
use security::token_config::TokenConfig;
use std::env;

const DEFAULT_SECRET: &str = "change-me-in-production";
const DEFAULT_ALGORITHM: &str = "HS256";
const DEFAULT_TTL_MINUTES: i64 = 30;

/// Load token settings from environment variables
///
/// Environment variables:
/// - JWT_SECRET_KEY: HMAC signing secret (default: development placeholder)
/// - JWT_ALGORITHM: HS256, HS384 or HS512 (default: "HS256")
/// - ACCESS_TOKEN_EXPIRE_MINUTES: Token lifetime (default: 30)
pub fn from_env() -> anyhow::Result<TokenConfig> {
    token_config(
        env::var("JWT_SECRET_KEY").ok(),
        env::var("JWT_ALGORITHM").ok(),
        env::var("ACCESS_TOKEN_EXPIRE_MINUTES").ok(),
    )
}

fn token_config(
    secret: Option<String>,
    algorithm: Option<String>,
    ttl_minutes: Option<String>,
) -> anyhow::Result<TokenConfig> {
    let secret = secret.unwrap_or_else(|| {
        tracing::warn!("JWT_SECRET_KEY is not set, using the development secret");
        DEFAULT_SECRET.to_string()
    });
    let algorithm = algorithm.unwrap_or_else(|| DEFAULT_ALGORITHM.to_string());
    let ttl_minutes = match ttl_minutes {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("ACCESS_TOKEN_EXPIRE_MINUTES is not a number: {raw}"))?,
        None => DEFAULT_TTL_MINUTES,
    };

    TokenConfig::new(secret, &algorithm, ttl_minutes).context("invalid token configuration")
}
