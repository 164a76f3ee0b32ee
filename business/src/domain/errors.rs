/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RepositoryError {
    /// The requested row does not exist.
    #[error("repository.not_found")]
    NotFound,
    /// A unique constraint rejected the write.
    #[error("repository.duplicated")]
    Duplicated,
    /// A foreign key rejected the write: the referenced row is gone, or the
    /// row being deleted is still referenced.
    #[error("repository.reference_violation")]
    ReferenceViolation,
    /// The store could not be reached or the statement failed.
    #[error("repository.database_error")]
    DatabaseError,
}

impl RepositoryError {
    /// Turns `NotFound` into `Ok(None)` so optional lookups can be expressed
    /// with `?` on the remaining failure cases.
    pub fn into_option<T>(result: Result<T, RepositoryError>) -> Result<Option<T>, RepositoryError> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(RepositoryError::NotFound) => Ok(None),
            Err(other) => Err(other),
        }
    }
}
