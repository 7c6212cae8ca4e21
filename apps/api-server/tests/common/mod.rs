//! Shared fixtures for the HTTP tests.
#![allow(dead_code)]

use std::sync::{Arc, OnceLock};

use chrono::{DateTime, TimeZone, Utc};

use api_server::state::AppState;
use noticeboard_core::domain::Teacher;
use noticeboard_core::ports::PasswordService;
use noticeboard_infra::{
    Argon2PasswordService, FixedClock, InMemoryAnnouncementRepository, InMemoryTeacherRepository,
};

pub const TEACHER: &str = "mrodriguez";
pub const TEACHER_PASSWORD: &str = "art123";

/// The instant every test runs at.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

/// Hashing is slow in debug builds; do it once per test binary.
fn password_hash() -> &'static str {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| Argon2PasswordService::new().hash(TEACHER_PASSWORD).unwrap())
}

pub struct TestContext {
    pub state: AppState,
    pub announcements: Arc<InMemoryAnnouncementRepository>,
}

pub fn context() -> TestContext {
    let announcements = Arc::new(InMemoryAnnouncementRepository::new());
    let teachers = Arc::new(InMemoryTeacherRepository::with_teachers(vec![Teacher::new(
        TEACHER,
        "Ms. Rodriguez",
        "teacher",
        password_hash(),
    )]));

    let state = AppState::from_stores(
        announcements.clone(),
        teachers,
        Arc::new(Argon2PasswordService::new()),
        Arc::new(FixedClock(now())),
    );

    TestContext {
        state,
        announcements,
    }
}

/// Build a query string, escaping the few characters the tests use.
pub fn query(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| {
            let v = v.replace('%', "%25").replace(' ', "%20").replace('+', "%2B");
            format!("{k}={v}")
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Initialize the service under test with the full route table.
macro_rules! test_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(api_server::observability::RequestIdMiddleware)
                .app_data(actix_web::web::Data::new($state))
                .configure(api_server::handlers::configure_routes),
        )
        .await
    };
}
