use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::farmer::repository::FarmerRepository;
use crate::domain::logger::Logger;
use crate::domain::product::hydration::EntityHydrator;
use crate::domain::product::model::Product;
use crate::domain::product::read_model::{CategorySummary, FarmerSummary, ProductSearchResult};

/// Hydrates products through the category and farmer repositories.
///
/// `hydrate` issues one batched lookup per entity kind, run concurrently, no
/// matter how many products are passed in.
pub struct RepositoryEntityHydrator {
    pub category_repository: Arc<dyn CategoryRepository>,
    pub farmer_repository: Arc<dyn FarmerRepository>,
    pub logger: Arc<dyn Logger>,
}

fn distinct_ids(ids: impl Iterator<Item = i64>) -> Vec<i64> {
    ids.collect::<BTreeSet<_>>().into_iter().collect()
}

impl RepositoryEntityHydrator {
    fn warn_missing<T>(&self, kind: &str, requested: &[i64], found: &HashMap<i64, T>) {
        let missing: Vec<String> = requested
            .iter()
            .filter(|id| !found.contains_key(id))
            .map(|id| id.to_string())
            .collect();
        if !missing.is_empty() {
            self.logger.warn(&format!(
                "Unresolved {} reference(s): {}",
                kind,
                missing.join(", ")
            ));
        }
    }
}

#[async_trait]
impl EntityHydrator for RepositoryEntityHydrator {
    async fn resolve_category(&self, id: i64) -> Result<Option<CategorySummary>, RepositoryError> {
        let category = RepositoryError::into_option(self.category_repository.get_by_id(id).await)?;
        if category.is_none() {
            self.logger
                .warn(&format!("Unresolved category reference(s): {}", id));
        }
        Ok(category.map(CategorySummary::from))
    }

    async fn resolve_farmer(&self, id: i64) -> Result<Option<FarmerSummary>, RepositoryError> {
        let farmer = RepositoryError::into_option(self.farmer_repository.get_by_id(id).await)?;
        if farmer.is_none() {
            self.logger
                .warn(&format!("Unresolved farmer reference(s): {}", id));
        }
        Ok(farmer.map(FarmerSummary::from))
    }

    async fn hydrate(
        &self,
        products: Vec<Product>,
    ) -> Result<Vec<ProductSearchResult>, RepositoryError> {
        if products.is_empty() {
            return Ok(Vec::new());
        }

        let category_ids = distinct_ids(products.iter().map(|p| p.category_id));
        let farmer_ids = distinct_ids(products.iter().map(|p| p.farmer_id));

        let (categories, farmers) = tokio::try_join!(
            self.category_repository.get_by_ids(&category_ids),
            self.farmer_repository.get_by_ids(&farmer_ids),
        )?;

        let categories: HashMap<i64, CategorySummary> = categories
            .into_iter()
            .map(|c| (c.id, CategorySummary::from(c)))
            .collect();
        let farmers: HashMap<i64, FarmerSummary> = farmers
            .into_iter()
            .map(|f| (f.id, FarmerSummary::from(f)))
            .collect();

        self.warn_missing("category", &category_ids, &categories);
        self.warn_missing("farmer", &farmer_ids, &farmers);

        Ok(products
            .into_iter()
            .map(|product| {
                let category = categories.get(&product.category_id).cloned();
                let farmer = farmers.get(&product.farmer_id).cloned();
                ProductSearchResult::assemble(product, category, farmer)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        MockCategoryRepo, MockFarmerRepo, category, farmer, mock_logger, product,
    };

    fn hydrator(
        category_repository: MockCategoryRepo,
        farmer_repository: MockFarmerRepo,
    ) -> RepositoryEntityHydrator {
        RepositoryEntityHydrator {
            category_repository: Arc::new(category_repository),
            farmer_repository: Arc::new(farmer_repository),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_resolve_existing_category() {
        let mut categories = MockCategoryRepo::new();
        categories
            .expect_get_by_id()
            .returning(|id| Ok(category(id, "Vegetables")));

        let result = hydrator(categories, MockFarmerRepo::new())
            .resolve_category(3)
            .await
            .unwrap();

        assert_eq!(result.map(|c| c.name), Some("Vegetables".to_string()));
    }

    #[tokio::test]
    async fn should_resolve_missing_farmer_as_absent() {
        let mut farmers = MockFarmerRepo::new();
        farmers
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let result = hydrator(MockCategoryRepo::new(), farmers)
            .resolve_farmer(9)
            .await;

        assert_eq!(result, Ok(None));
    }

    #[tokio::test]
    async fn should_propagate_storage_failure_on_single_lookup() {
        let mut categories = MockCategoryRepo::new();
        categories
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let result = hydrator(categories, MockFarmerRepo::new())
            .resolve_category(1)
            .await;

        assert_eq!(result, Err(RepositoryError::DatabaseError));
    }

    #[tokio::test]
    async fn should_hydrate_in_input_order_with_missing_references_absent() {
        let mut categories = MockCategoryRepo::new();
        categories
            .expect_get_by_ids()
            .returning(|_| Ok(vec![category(10, "Fruit")]));
        let mut farmers = MockFarmerRepo::new();
        farmers
            .expect_get_by_ids()
            .returning(|_| Ok(vec![farmer(20, 1)]));

        let results = hydrator(categories, farmers)
            .hydrate(vec![
                product(2, "Pear", 1.0, 1, 11, 20),
                product(1, "Apple", 1.0, 1, 10, 21),
            ])
            .await
            .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, 2);
        assert!(results[0].category.is_none());
        assert_eq!(results[0].farmer.as_ref().map(|f| f.id), Some(20));
        assert_eq!(results[1].id, 1);
        assert_eq!(results[1].category.as_ref().map(|c| c.id), Some(10));
        assert!(results[1].farmer.is_none());
    }

    #[tokio::test]
    async fn should_batch_lookups_over_distinct_ids() {
        let mut categories = MockCategoryRepo::new();
        categories
            .expect_get_by_ids()
            .withf(|ids| ids.to_vec() == vec![1, 2])
            .times(1)
            .returning(|ids| Ok(ids.iter().map(|id| category(*id, "C")).collect()));
        let mut farmers = MockFarmerRepo::new();
        farmers
            .expect_get_by_ids()
            .withf(|ids| ids.to_vec() == vec![5])
            .times(1)
            .returning(|ids| Ok(ids.iter().map(|id| farmer(*id, *id)).collect()));

        let products: Vec<Product> = (0..1_000)
            .map(|i| product(i, "Item", 1.0, 1, 1 + i % 2, 5))
            .collect();

        let results = hydrator(categories, farmers)
            .hydrate(products)
            .await
            .unwrap();

        assert_eq!(results.len(), 1_000);
        assert!(results.iter().all(|r| r.category.is_some() && r.farmer.is_some()));
        assert!(results.iter().enumerate().all(|(i, r)| r.id == i as i64));
    }

    #[tokio::test]
    async fn should_skip_lookups_when_nothing_to_hydrate() {
        let results = hydrator(MockCategoryRepo::new(), MockFarmerRepo::new())
            .hydrate(Vec::new())
            .await
            .unwrap();

        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn should_fail_hydration_when_storage_is_unavailable() {
        let mut categories = MockCategoryRepo::new();
        categories.expect_get_by_ids().returning(|_| Ok(Vec::new()));
        let mut farmers = MockFarmerRepo::new();
        farmers
            .expect_get_by_ids()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let result = hydrator(categories, farmers)
            .hydrate(vec![product(1, "Apple", 1.0, 1, 1, 1)])
            .await;

        assert_eq!(result, Err(RepositoryError::DatabaseError));
    }
}
