use chrono::{DateTime, Utc};

/// Source of "now". Injected so tests can pin time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
