use thiserror::Error;

use crate::repository::RepositoryError;

pub mod promotions;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors returned by the service layer to the HTTP handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request payload or query was malformed or violated an invariant.
    #[error("{0}")]
    Form(String),
    #[error("not found")]
    NotFound,
    #[error("repository error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}
