/// Token failures. Validation collapses every cause (bad signature,
/// malformed token, expiry) into `InvalidToken` so callers cannot tell them
/// apart.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AuthError {
    #[error("auth.invalid_token")]
    InvalidToken,
    #[error("auth.token_issuance_failed")]
    Issuance,
}
