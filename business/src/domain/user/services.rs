use async_trait::async_trait;

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("password_hasher.failed")]
pub struct PasswordHashError;

/// Service port for one-way password hashing.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> Result<String, PasswordHashError>;
    /// `Ok(false)` for a wrong password; `Err` only when the stored hash is
    /// unreadable or the hasher itself failed.
    async fn verify(&self, password: &str, hashed_password: &str)
    -> Result<bool, PasswordHashError>;
}
