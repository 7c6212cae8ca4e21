//! Application services - the operations the HTTP layer exposes.

mod announcements;
mod auth;
mod identity;

pub use announcements::{AnnouncementDraft, AnnouncementService, parse_announcement_id};
pub use auth::AuthService;
pub use identity::DirectoryIdentity;
