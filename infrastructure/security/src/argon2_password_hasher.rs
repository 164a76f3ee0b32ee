use argon2::Argon2;
use argon2::password_hash::{
    Error as HashError, PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
};
use async_trait::async_trait;

use business::domain::user::services::{PasswordHashError, PasswordHasher};

/// Argon2id password hashing (PHC string format). The work runs on tokio's
/// blocking pool.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

fn hash_blocking(password: &str) -> Result<String, PasswordHashError> {
    let salt_bytes: [u8; 16] = rand::random();
    let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| {
        tracing::error!("Failed to encode password salt: {e}");
        PasswordHashError
    })?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            tracing::error!("Failed to hash password: {e}");
            PasswordHashError
        })
}

fn verify_blocking(password: &str, hashed_password: &str) -> Result<bool, PasswordHashError> {
    let parsed = PasswordHash::new(hashed_password).map_err(|e| {
        tracing::error!("Stored password hash is unreadable: {e}");
        PasswordHashError
    })?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(HashError::Password) => Ok(false),
        Err(e) => {
            tracing::error!("Failed to verify password: {e}");
            Err(PasswordHashError)
        }
    }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, PasswordHashError> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || hash_blocking(&password))
            .await
            .map_err(|e| {
                tracing::error!("Password hashing task failed: {e}");
                PasswordHashError
            })?
    }

    async fn verify(
        &self,
        password: &str,
        hashed_password: &str,
    ) -> Result<bool, PasswordHashError> {
        let password = password.to_owned();
        let hashed_password = hashed_password.to_owned();
        tokio::task::spawn_blocking(move || verify_blocking(&password, &hashed_password))
            .await
            .map_err(|e| {
                tracing::error!("Password verification task failed: {e}");
                PasswordHashError
            })?
    }
}
