use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::filter::ProductPredicate;
use super::model::Product;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns the products matching every predicate, in storage order.
    /// An empty slice matches the whole collection.
    async fn search(&self, predicates: &[ProductPredicate]) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
}
