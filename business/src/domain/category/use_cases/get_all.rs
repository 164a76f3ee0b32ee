use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::ProductCategory;

pub struct GetAllCategoriesParams {
    pub limit: i64,
    pub offset: i64,
}

impl Default for GetAllCategoriesParams {
    fn default() -> Self {
        Self {
            limit: 100,
            offset: 0,
        }
    }
}

#[async_trait]
pub trait GetAllCategoriesUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetAllCategoriesParams,
    ) -> Result<Vec<ProductCategory>, CategoryError>;
}
