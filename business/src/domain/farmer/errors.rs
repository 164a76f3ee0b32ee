#[derive(Debug, thiserror::Error)]
pub enum FarmerError {
    #[error("farmer.name_empty")]
    NameEmpty,
    #[error("farmer.invalid_email")]
    InvalidEmail,
    #[error("farmer.location_too_long")]
    LocationTooLong,
    #[error("farmer.invalid_pagination")]
    InvalidPagination,
    #[error("farmer.not_found")]
    NotFound,
    #[error("farmer.profile_already_exists")]
    ProfileAlreadyExists,
    #[error("farmer.email_already_registered")]
    EmailAlreadyRegistered,
    #[error("farmer.forbidden")]
    Forbidden,
    /// The profile still has products listed against it.
    #[error("farmer.has_products")]
    HasProducts,
    /// The owning user account no longer exists.
    #[error("farmer.owner_not_found")]
    OwnerNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
