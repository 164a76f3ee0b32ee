use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::ProductCategory;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::get_all::{
    GetAllCategoriesParams, GetAllCategoriesUseCase,
};
use crate::domain::logger::Logger;

const MAX_PAGE_SIZE: i64 = 1000;

pub struct GetAllCategoriesUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllCategoriesUseCase for GetAllCategoriesUseCaseImpl {
    async fn execute(
        &self,
        params: GetAllCategoriesParams,
    ) -> Result<Vec<ProductCategory>, CategoryError> {
        if params.offset < 0 || !(1..=MAX_PAGE_SIZE).contains(&params.limit) {
            return Err(CategoryError::InvalidPagination);
        }

        self.logger.debug(&format!(
            "Getting categories (limit {}, offset {})",
            params.limit, params.offset
        ));
        let categories = self
            .repository
            .get_all(params.limit, params.offset)
            .await?;
        Ok(categories)
    }
}
