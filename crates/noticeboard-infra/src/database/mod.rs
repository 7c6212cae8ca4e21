//! Announcement and teacher stores.

mod memory;

#[cfg(feature = "postgres")]
mod connections;
#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
pub mod postgres_repo;

pub use memory::{InMemoryAnnouncementRepository, InMemoryTeacherRepository};

#[cfg(feature = "postgres")]
pub use connections::{DatabaseConfig, DatabaseConnections};
#[cfg(feature = "postgres")]
pub use postgres_repo::{PostgresAnnouncementRepository, PostgresTeacherRepository};
