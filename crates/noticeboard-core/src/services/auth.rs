use std::sync::Arc;

use crate::domain::Teacher;
use crate::error::DomainError;
use crate::ports::{PasswordService, TeacherRepository};

/// Teacher login and the username-only session check.
pub struct AuthService {
    teachers: Arc<dyn TeacherRepository>,
    passwords: Arc<dyn PasswordService>,
}

impl AuthService {
    pub fn new(teachers: Arc<dyn TeacherRepository>, passwords: Arc<dyn PasswordService>) -> Self {
        Self {
            teachers,
            passwords,
        }
    }

    /// Verify a username/password pair.
    ///
    /// Unknown usernames and wrong passwords both yield
    /// [`DomainError::InvalidCredentials`].
    pub async fn login(&self, username: &str, password: &str) -> Result<Teacher, DomainError> {
        let teacher = self
            .teachers
            .find_by_username(username)
            .await?
            .ok_or(DomainError::InvalidCredentials)?;

        if !self.passwords.verify(password, &teacher.password_hash)? {
            tracing::debug!(teacher = %username, "Password mismatch");
            return Err(DomainError::InvalidCredentials);
        }

        tracing::info!(teacher = %teacher.username, "Teacher logged in");
        Ok(teacher)
    }

    /// Look a teacher up by username alone.
    pub async fn check_session(&self, username: &str) -> Result<Teacher, DomainError> {
        self.teachers
            .find_by_username(username)
            .await?
            .ok_or(DomainError::NotFound { entity: "Teacher" })
    }
}
