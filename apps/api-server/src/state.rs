//! Application state - shared across all handlers.

use std::sync::Arc;

use noticeboard_core::ports::{AnnouncementRepository, Clock, PasswordService, TeacherRepository};
use noticeboard_core::services::{AnnouncementService, AuthService, DirectoryIdentity};
use noticeboard_infra::seed::{demo_announcements, demo_teachers};
use noticeboard_infra::{
    Argon2PasswordService, InMemoryAnnouncementRepository, InMemoryTeacherRepository, SystemClock,
};

#[cfg(feature = "postgres")]
use noticeboard_infra::database::{
    DatabaseConfig, DatabaseConnections, PostgresAnnouncementRepository, PostgresTeacherRepository,
};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub announcements: Arc<AnnouncementService>,
    pub auth: Arc<AuthService>,
    #[cfg(feature = "postgres")]
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Wire the services over the given stores.
    pub fn from_stores(
        announcements: Arc<dyn AnnouncementRepository>,
        teachers: Arc<dyn TeacherRepository>,
        passwords: Arc<dyn PasswordService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let identity = Arc::new(DirectoryIdentity::new(teachers.clone()));

        Self {
            announcements: Arc::new(AnnouncementService::new(announcements, identity, clock)),
            auth: Arc::new(AuthService::new(teachers, passwords)),
            #[cfg(feature = "postgres")]
            db: None,
        }
    }

    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        if let Some(url) = &config.database_url {
            let db_config = DatabaseConfig {
                url: url.clone(),
                max_connections: config.db_max_connections,
                min_connections: config.db_min_connections,
            };

            match DatabaseConnections::init(&db_config).await {
                Ok(connections) => {
                    let conn = Arc::new(connections);
                    let mut state = Self::from_stores(
                        Arc::new(PostgresAnnouncementRepository::new(conn.main.clone())),
                        Arc::new(PostgresTeacherRepository::new(conn.main.clone())),
                        Arc::new(Argon2PasswordService::new()),
                        Arc::new(SystemClock),
                    );
                    state.db = Some(conn);
                    tracing::info!("Application state initialized (postgres)");
                    return state;
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                }
            }
        }

        #[cfg(not(feature = "postgres"))]
        if config.database_url.is_some() {
            tracing::warn!("DATABASE_URL ignored - built without postgres feature");
        }

        if config.database_url.is_none() {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        }

        let state = Self::in_memory(config.seed_demo_data);
        tracing::info!("Application state initialized (in-memory)");
        state
    }

    /// In-memory stores, optionally loaded with demo data.
    pub fn in_memory(seed_demo_data: bool) -> Self {
        let passwords = Arc::new(Argon2PasswordService::new());
        let clock = SystemClock;

        let (teachers, announcements) = if seed_demo_data {
            match demo_teachers(passwords.as_ref()) {
                Ok(teachers) => {
                    tracing::warn!(
                        count = teachers.len(),
                        "Loaded demo teacher accounts - do not use in production"
                    );
                    (teachers, demo_announcements(clock.now()))
                }
                Err(e) => {
                    tracing::error!("Failed to hash demo passwords: {}", e);
                    (Vec::new(), Vec::new())
                }
            }
        } else {
            (Vec::new(), Vec::new())
        };

        Self::from_stores(
            Arc::new(InMemoryAnnouncementRepository::with_announcements(
                announcements,
            )),
            Arc::new(InMemoryTeacherRepository::with_teachers(teachers)),
            passwords,
            Arc::new(clock),
        )
    }

    /// Which store is serving requests, for the health endpoint.
    pub async fn store_status(&self) -> &'static str {
        #[cfg(feature = "postgres")]
        if let Some(db) = &self.db {
            return if db.ping().await { "postgres" } else { "unavailable" };
        }

        "in-memory"
    }
}
