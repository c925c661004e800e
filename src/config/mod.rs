use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connections the pool keeps open even when idle.
    pub pool_min: u32,
    /// Upper bound on concurrent database sessions; requests beyond it queue.
    pub pool_max: u32,
    /// How long an acquire may wait for a free connection before failing.
    pub acquire_timeout_secs: u64,
    pub enable_slow_query_warning: bool,
    pub slow_query_threshold_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("RECIPEBOOK_DB_POOL_MIN") {
            self.database.pool_min = v.parse().unwrap_or(self.database.pool_min);
        }
        if let Ok(v) = env::var("RECIPEBOOK_DB_POOL_MAX") {
            self.database.pool_max = v.parse().unwrap_or(self.database.pool_max);
        }
        if let Ok(v) = env::var("RECIPEBOOK_DB_ACQUIRE_TIMEOUT_SECS") {
            self.database.acquire_timeout_secs = v.parse().unwrap_or(self.database.acquire_timeout_secs);
        }
        if let Ok(v) = env::var("RECIPEBOOK_DB_ENABLE_SLOW_QUERY_WARNING") {
            self.database.enable_slow_query_warning =
                v.parse().unwrap_or(self.database.enable_slow_query_warning);
        }
        if let Ok(v) = env::var("RECIPEBOOK_DB_SLOW_QUERY_THRESHOLD_MS") {
            self.database.slow_query_threshold_ms =
                v.parse().unwrap_or(self.database.slow_query_threshold_ms);
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            database: DatabaseConfig {
                pool_min: 1,
                pool_max: 3,
                acquire_timeout_secs: 60,
                enable_slow_query_warning: true,
                slow_query_threshold_ms: 100,
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            database: DatabaseConfig {
                pool_min: 1,
                pool_max: 3,
                acquire_timeout_secs: 60,
                enable_slow_query_warning: true,
                slow_query_threshold_ms: 1000,
            },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
