#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.not_found")]
    NotFound,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.invalid_stock")]
    InvalidStock,
    #[error("product.invalid_price_range")]
    InvalidPriceRange,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
