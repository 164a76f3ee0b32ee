use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::ProductCategory;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn get_all(&self, limit: i64, offset: i64)
    -> Result<Vec<ProductCategory>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<ProductCategory, RepositoryError>;
    /// Batch lookup. Unknown ids are simply missing from the result.
    async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<ProductCategory>, RepositoryError>;
}
