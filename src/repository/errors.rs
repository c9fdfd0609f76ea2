use thiserror::Error;

/// Result type returned by all repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors surfaced by the persistence gateway.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested record does not exist within the caller's scope.
    #[error("record not found")]
    NotFound,
    /// No backing store is configured; writes cannot proceed.
    #[error("storage is not configured")]
    Unavailable,
    /// An insert collided with a unique constraint.
    #[error("unique constraint violation")]
    UniqueViolation,
    /// Any other Diesel failure.
    #[error("database error: {0}")]
    Database(diesel::result::Error),
    /// The pool could not hand out a connection.
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
}

impl From<diesel::result::Error> for RepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorKind, Error};

        match err {
            Error::NotFound => Self::NotFound,
            Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => Self::UniqueViolation,
            other => Self::Database(other),
        }
    }
}
