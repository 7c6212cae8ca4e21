//! SeaORM entities.

pub mod announcement;
pub mod teacher;
