//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Absent means the in-memory stores are used.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    /// Load demo teachers and a welcome announcement in in-memory mode.
    pub seed_demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_url: None,
            db_max_connections: 100,
            db_min_connections: 10,
            seed_demo_data: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT").unwrap_or(defaults.port),
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS")
                .unwrap_or(defaults.db_max_connections),
            db_min_connections: parse_var("DB_MIN_CONNECTIONS")
                .unwrap_or(defaults.db_min_connections),
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(defaults.seed_demo_data),
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}
