use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::Email;
use business::domain::user::model::{NewUser, User};
use business::domain::user::repository::UserRepository;

use super::entity::{USER_COLUMNS, UserEntity};
use crate::db::write_error;

pub struct UserRepositoryPostgres {
    pool: PgPool,
}

impl UserRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn get_by_id(&self, id: i64) -> Result<User, RepositoryError> {
        sqlx::query_as::<_, UserEntity>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?
        .into_domain()
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        sqlx::query_as::<_, UserEntity>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .map(UserEntity::into_domain)
        .transpose()
    }

    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        let entity = sqlx::query_as::<_, UserEntity>(&format!(
            r#"INSERT INTO users (email, hashed_password, user_type, is_active)
            VALUES ($1, $2, $3, $4)
            RETURNING {USER_COLUMNS}"#
        ))
        .bind(user.email.as_str())
        .bind(&user.hashed_password)
        .bind(user.user_type.to_string())
        .bind(user.is_active)
        .fetch_one(&mut *tx)
        .await
        .map_err(write_error)?;

        tx.commit().await.map_err(write_error)?;
        entity.into_domain()
    }
}
