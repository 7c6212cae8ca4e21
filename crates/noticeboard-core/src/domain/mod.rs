//! Domain entities - the core business objects.

mod announcement;
mod teacher;
pub mod timestamp;

pub use announcement::{Announcement, AnnouncementChanges, NewAnnouncement};
pub use teacher::Teacher;
