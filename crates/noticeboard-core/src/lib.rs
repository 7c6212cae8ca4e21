//! # Noticeboard Core
//!
//! The domain layer of the noticeboard service.
//! Announcements, teachers, the ports that infrastructure implements, and the
//! services that the HTTP layer drives. No infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
