use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::read_model::ProductSearchResult;

pub struct GetProductByIdParams {
    pub id: i64,
}

#[async_trait]
pub trait GetProductByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetProductByIdParams)
    -> Result<ProductSearchResult, ProductError>;
}
