use thiserror::Error;

use crate::auth::AuthenticatedUser;
use crate::domain::restaurant::Restaurant;
use crate::llm::LlmError;
use crate::repository::RestaurantReader;
use crate::repository::errors::RepositoryError;

pub mod analytics;
pub mod auth;
pub mod booking;
pub mod chat;
pub mod menu;
pub mod restaurant;

/// Result type returned by all service-layer operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by the service layer and rendered by the routes.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The acting user does not own the referenced resource.
    #[error("forbidden")]
    Forbidden,
    /// The referenced resource does not exist.
    #[error("not found")]
    NotFound,
    /// The operation collides with an existing record.
    #[error("already exists")]
    Conflict,
    /// The request payload failed validation; nothing was changed.
    #[error("{0}")]
    Form(String),
    /// No backing store is configured; the write was rejected.
    #[error("storage is not configured")]
    Unavailable,
    /// The language-model collaborator failed.
    #[error(transparent)]
    Llm(#[from] LlmError),
    /// Unexpected persistence failure.
    #[error("repository error: {0}")]
    Repository(RepositoryError),
    /// Any other unexpected failure.
    #[error("{0}")]
    Internal(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Self::NotFound,
            RepositoryError::Unavailable => Self::Unavailable,
            RepositoryError::UniqueViolation => Self::Conflict,
            other => Self::Repository(other),
        }
    }
}

/// Resolve the restaurant owned by the acting user.
///
/// Every owner-facing procedure starts here; a user without a restaurant
/// gets a not-found error before any further work happens.
pub(crate) fn owned_restaurant<R>(
    repo: &R,
    user: &AuthenticatedUser,
) -> ServiceResult<Restaurant>
where
    R: RestaurantReader + ?Sized,
{
    repo.get_restaurant_by_user_id(user.id)?
        .ok_or(ServiceError::NotFound)
}
