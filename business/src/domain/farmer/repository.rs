use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::Email;

use super::model::{Farmer, NewFarmer};

#[async_trait]
pub trait FarmerRepository: Send + Sync {
    async fn get_all(&self, skip: i64, limit: i64) -> Result<Vec<Farmer>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Farmer, RepositoryError>;
    /// Batch lookup. Unknown ids are simply missing from the result.
    async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<Farmer>, RepositoryError>;
    async fn get_by_user_id(&self, user_id: i64) -> Result<Farmer, RepositoryError>;
    async fn find_by_email(&self, email: &Email) -> Result<Option<Farmer>, RepositoryError>;
    async fn create(&self, farmer: &NewFarmer) -> Result<Farmer, RepositoryError>;
    async fn update(&self, farmer: &Farmer) -> Result<(), RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
