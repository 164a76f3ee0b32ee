use chrono::{DateTime, Utc};

pub const BEARER_TOKEN_TYPE: &str = "bearer";

/// Identity carried by a validated access token.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessClaims {
    pub subject_id: i64,
    pub email: Option<String>,
    pub expires_at: DateTime<Utc>,
}

/// A freshly issued, signed bearer token.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn bearer(access_token: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            access_token,
            token_type: BEARER_TOKEN_TYPE.to_string(),
            expires_at,
        }
    }
}
