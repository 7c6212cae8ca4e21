//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod clock;
mod repository;

pub use auth::{AuthError, PasswordService, TeacherIdentity};
pub use clock::Clock;
pub use repository::{AnnouncementRepository, TeacherRepository};
