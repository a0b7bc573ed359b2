use thiserror::Error;

use crate::repository::RepositoryError;

pub mod auth;
pub mod blogs;
pub mod products;
pub mod uploads;

/// Errors surfaced by the service layer, translated to HTTP statuses by the
/// route handlers: validation failures map to 400, missing credentials to
/// 401, missing records to 404 and everything else to 500.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request payload failed a presence or shape check.
    #[error("{0}")]
    Validation(String),
    /// The referenced record does not exist.
    #[error("not found")]
    NotFound,
    /// The caller is not an authenticated admin.
    #[error("unauthorized")]
    Unauthorized,
    /// A storage failure the caller cannot do anything about.
    #[error(transparent)]
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

/// Result type returned by all service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
