//! Authentication ports.

use async_trait::async_trait;

use crate::domain::Teacher;
use crate::error::DomainError;

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    ///
    /// A mismatch is `Ok(false)`; `Err` is reserved for unusable hashes.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Resolves the caller of an announcement operation to a teacher.
///
/// Today this is a bare existence check on the username passed with the
/// request. A session layer would implement this trait instead.
#[async_trait]
pub trait TeacherIdentity: Send + Sync {
    /// Fails with [`DomainError::Unauthorized`] if no such teacher exists.
    async fn require_teacher(&self, username: &str) -> Result<Teacher, DomainError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Hashing error: {0}")]
    HashingError(String),
}
