use chrono::{DateTime, Utc};

use super::errors::UserError;
use super::value_objects::UserType;
use crate::domain::shared::value_objects::Email;

pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub email: Email,
    pub hashed_password: String,
    pub user_type: UserType,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated account ready to be inserted. The id is assigned by storage.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: Email,
    pub hashed_password: String,
    pub user_type: UserType,
    pub is_active: bool,
}

impl NewUser {
    pub fn new(email: Email, hashed_password: String, user_type: UserType) -> Self {
        Self {
            email,
            hashed_password,
            user_type,
            is_active: true,
        }
    }
}

pub fn validate_password(password: &str) -> Result<(), UserError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(UserError::PasswordTooShort);
    }
    Ok(())
}

impl User {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        email: String,
        hashed_password: String,
        user_type: UserType,
        is_active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email: Email::from_repository(email),
            hashed_password,
            user_type,
            is_active,
            created_at,
            updated_at,
        }
    }
}
