use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::user::model::User;
use business::domain::user::value_objects::UserType;

pub const USER_COLUMNS: &str =
    "id, email, hashed_password, user_type, is_active, created_at, updated_at";

#[derive(Debug, FromRow)]
pub struct UserEntity {
    pub id: i64,
    pub email: String,
    pub hashed_password: String,
    pub user_type: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserEntity {
    pub fn into_domain(self) -> Result<User, RepositoryError> {
        let user_type = self.user_type.parse::<UserType>().map_err(|_| {
            tracing::error!("User {} has unknown type {}", self.id, self.user_type);
            RepositoryError::DatabaseError
        })?;

        Ok(User::from_repository(
            self.id,
            self.email,
            self.hashed_password,
            user_type,
            self.is_active,
            self.created_at,
            self.updated_at,
        ))
    }
}
