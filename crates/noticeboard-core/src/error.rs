//! Domain-level error types.

use thiserror::Error;

use crate::ports::AuthError;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("{0}")]
    Validation(String),

    /// The supplied teacher identifier does not exist.
    #[error("Authentication required")]
    Unauthorized,

    /// Login failed. Deliberately the same for unknown users and bad passwords.
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                DomainError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                DomainError::Internal("Database error".to_string())
            }
        }
    }
}

impl From<AuthError> for DomainError {
    fn from(err: AuthError) -> Self {
        tracing::error!("Password verification error: {}", err);
        DomainError::Internal("Password verification failed".to_string())
    }
}
