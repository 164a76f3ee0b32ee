#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user.invalid_email")]
    InvalidEmail,
    #[error("user.password_too_short")]
    PasswordTooShort,
    #[error("user.email_already_registered")]
    EmailAlreadyRegistered,
    #[error("user.invalid_credentials")]
    InvalidCredentials,
    #[error("user.not_found")]
    NotFound,
    #[error("user.unauthenticated")]
    Unauthenticated,
    #[error("user.password_hashing_failed")]
    PasswordHashing,
    #[error("user.token_issuance_failed")]
    TokenIssuance,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
