use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::filter::SearchCriteria;
use crate::domain::product::read_model::ProductSearchResult;

#[async_trait]
pub trait SearchProductsUseCase: Send + Sync {
    async fn execute(
        &self,
        criteria: Option<SearchCriteria>,
    ) -> Result<Vec<ProductSearchResult>, ProductError>;
}
