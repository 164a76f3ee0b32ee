use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::farmer::model::{Farmer, NewFarmer};
use business::domain::farmer::repository::FarmerRepository;
use business::domain::shared::value_objects::Email;

use super::entity::{FARMER_COLUMNS, FarmerEntity};
use crate::db::write_error;

pub struct FarmerRepositoryPostgres {
    pool: PgPool,
}

impl FarmerRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_one_where(
        &self,
        condition: &str,
        value: i64,
    ) -> Result<Farmer, RepositoryError> {
        let entity = sqlx::query_as::<_, FarmerEntity>(&format!(
            "SELECT {FARMER_COLUMNS} FROM farmers WHERE {condition} = $1"
        ))
        .bind(value)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }
}

#[async_trait]
impl FarmerRepository for FarmerRepositoryPostgres {
    async fn get_all(&self, skip: i64, limit: i64) -> Result<Vec<Farmer>, RepositoryError> {
        let entities = sqlx::query_as::<_, FarmerEntity>(&format!(
            "SELECT {FARMER_COLUMNS} FROM farmers ORDER BY id OFFSET $1 LIMIT $2"
        ))
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Farmer, RepositoryError> {
        self.fetch_one_where("id", id).await
    }

    async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<Farmer>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = sqlx::query_as::<_, FarmerEntity>(&format!(
            "SELECT {FARMER_COLUMNS} FROM farmers WHERE id = ANY($1)"
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_user_id(&self, user_id: i64) -> Result<Farmer, RepositoryError> {
        self.fetch_one_where("user_id", user_id).await
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<Farmer>, RepositoryError> {
        let entity = sqlx::query_as::<_, FarmerEntity>(&format!(
            "SELECT {FARMER_COLUMNS} FROM farmers WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn create(&self, farmer: &NewFarmer) -> Result<Farmer, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        let entity = sqlx::query_as::<_, FarmerEntity>(&format!(
            r#"INSERT INTO farmers (user_id, name, email, phone, location)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {FARMER_COLUMNS}"#
        ))
        .bind(farmer.user_id)
        .bind(&farmer.name)
        .bind(farmer.email.as_str())
        .bind(&farmer.phone)
        .bind(&farmer.location)
        .fetch_one(&mut *tx)
        .await
        .map_err(write_error)?;

        tx.commit().await.map_err(write_error)?;
        Ok(entity.into_domain())
    }

    async fn update(&self, farmer: &Farmer) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        let result = sqlx::query(
            r#"UPDATE farmers
            SET name = $2, email = $3, phone = $4, location = $5, updated_at = NOW()
            WHERE id = $1"#,
        )
        .bind(farmer.id)
        .bind(&farmer.name)
        .bind(farmer.email.as_str())
        .bind(&farmer.phone)
        .bind(&farmer.location)
        .execute(&mut *tx)
        .await
        .map_err(write_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        tx.commit().await.map_err(write_error)?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM farmers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(write_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
