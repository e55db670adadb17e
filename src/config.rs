use std::env;

/// Service configuration, read from the environment with workable defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Database the allocation table lives in.
    pub database_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            database_url: "sqlite:adresse_ip.db?mode=rwc".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
        }
    }
}
