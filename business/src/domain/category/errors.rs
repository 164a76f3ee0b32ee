#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("category.invalid_pagination")]
    InvalidPagination,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
