use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::hydration::EntityHydrator;
use crate::domain::product::read_model::ProductSearchResult;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub hydrator: Arc<dyn EntityHydrator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(
        &self,
        params: GetProductByIdParams,
    ) -> Result<ProductSearchResult, ProductError> {
        self.logger
            .debug(&format!("Getting product by id: {}", params.id));

        let product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let (category, farmer) = tokio::try_join!(
            self.hydrator.resolve_category(product.category_id),
            self.hydrator.resolve_farmer(product.farmer_id),
        )?;

        Ok(ProductSearchResult::assemble(product, category, farmer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::hydrator::RepositoryEntityHydrator;
    use crate::test_support::{
        MockCategoryRepo, MockFarmerRepo, MockProductRepo, category, farmer, mock_logger, product,
    };

    fn use_case(
        repo: MockProductRepo,
        categories: MockCategoryRepo,
        farmers: MockFarmerRepo,
    ) -> GetProductByIdUseCaseImpl {
        GetProductByIdUseCaseImpl {
            repository: Arc::new(repo),
            hydrator: Arc::new(RepositoryEntityHydrator {
                category_repository: Arc::new(categories),
                farmer_repository: Arc::new(farmers),
                logger: mock_logger(),
            }),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_return_hydrated_product() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(|id| Ok(product(id, "Honey", 8.0, 2, 4, 6)));
        let mut categories = MockCategoryRepo::new();
        categories
            .expect_get_by_id()
            .returning(|id| Ok(category(id, "Pantry")));
        let mut farmers = MockFarmerRepo::new();
        farmers.expect_get_by_id().returning(|id| Ok(farmer(id, 60)));

        let result = use_case(repo, categories, farmers)
            .execute(GetProductByIdParams { id: 11 })
            .await
            .unwrap();

        assert_eq!(result.id, 11);
        assert_eq!(result.category.map(|c| c.id), Some(4));
        assert_eq!(result.farmer.map(|f| f.id), Some(6));
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_missing() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let result = use_case(repo, MockCategoryRepo::new(), MockFarmerRepo::new())
            .execute(GetProductByIdParams { id: 1 })
            .await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }

    #[tokio::test]
    async fn should_keep_product_when_farmer_missing() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(|id| Ok(product(id, "Honey", 8.0, 2, 4, 6)));
        let mut categories = MockCategoryRepo::new();
        categories
            .expect_get_by_id()
            .returning(|id| Ok(category(id, "Pantry")));
        let mut farmers = MockFarmerRepo::new();
        farmers
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let result = use_case(repo, categories, farmers)
            .execute(GetProductByIdParams { id: 11 })
            .await
            .unwrap();

        assert!(result.farmer.is_none());
        assert!(result.category.is_some());
    }
}
