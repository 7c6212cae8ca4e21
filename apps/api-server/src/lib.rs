//! # Noticeboard API Server
//!
//! HTTP surface for school announcements and teacher login.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod state;
pub mod telemetry;
