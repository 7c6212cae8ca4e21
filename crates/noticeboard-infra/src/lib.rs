//! # Noticeboard Infrastructure
//!
//! Concrete implementations of the ports defined in `noticeboard-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL repositories via SeaORM
//!
//! Without `postgres` only the in-memory repositories are available.

pub mod auth;
pub mod clock;
pub mod database;
pub mod seed;

pub use auth::Argon2PasswordService;
pub use clock::{FixedClock, SystemClock};
pub use database::{InMemoryAnnouncementRepository, InMemoryTeacherRepository};

#[cfg(feature = "postgres")]
pub use database::{DatabaseConfig, DatabaseConnections};
