use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;
use super::read_model::{CategorySummary, FarmerSummary, ProductSearchResult};

/// Resolves product references into read-model sub-records.
///
/// A missing row is `Ok(None)`: referential gaps never fail a read. Only
/// storage failures surface as errors.
#[async_trait]
pub trait EntityHydrator: Send + Sync {
    async fn resolve_category(&self, id: i64) -> Result<Option<CategorySummary>, RepositoryError>;
    async fn resolve_farmer(&self, id: i64) -> Result<Option<FarmerSummary>, RepositoryError>;
    /// Hydrates every product, preserving input order.
    async fn hydrate(
        &self,
        products: Vec<Product>,
    ) -> Result<Vec<ProductSearchResult>, RepositoryError>;
}
