use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::filter::{SearchCriteria, build_predicates};
use crate::domain::product::hydration::EntityHydrator;
use crate::domain::product::read_model::ProductSearchResult;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::search::SearchProductsUseCase;

pub struct SearchProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub hydrator: Arc<dyn EntityHydrator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchProductsUseCase for SearchProductsUseCaseImpl {
    async fn execute(
        &self,
        criteria: Option<SearchCriteria>,
    ) -> Result<Vec<ProductSearchResult>, ProductError> {
        if let Some(criteria) = &criteria {
            criteria.validate()?;
        }

        let predicates = build_predicates(criteria.as_ref());
        self.logger.debug(&format!(
            "Searching products with {} constraint(s)",
            predicates.len()
        ));

        let candidates = self.repository.search(&predicates).await.map_err(|e| {
            self.logger.error(&format!("Product search failed: {}", e));
            e
        })?;

        let results = self.hydrator.hydrate(candidates).await?;

        self.logger
            .info(&format!("Product search returned {} result(s)", results.len()));
        Ok(results)
    }
}
