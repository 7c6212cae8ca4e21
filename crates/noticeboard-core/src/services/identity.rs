use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::Teacher;
use crate::error::DomainError;
use crate::ports::{TeacherIdentity, TeacherRepository};

/// Identity check against the teacher directory: the username must exist.
pub struct DirectoryIdentity {
    teachers: Arc<dyn TeacherRepository>,
}

impl DirectoryIdentity {
    pub fn new(teachers: Arc<dyn TeacherRepository>) -> Self {
        Self { teachers }
    }
}

#[async_trait]
impl TeacherIdentity for DirectoryIdentity {
    async fn require_teacher(&self, username: &str) -> Result<Teacher, DomainError> {
        match self.teachers.find_by_username(username).await? {
            Some(teacher) => Ok(teacher),
            None => {
                tracing::debug!(teacher = %username, "Unknown teacher identifier");
                Err(DomainError::Unauthorized)
            }
        }
    }
}
