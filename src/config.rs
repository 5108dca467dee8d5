// src/config.rs
use std::env;

/// Environment-driven configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub search: SearchConfig,
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub node: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub index: String,
}

impl Config {
    /// Reads the configuration from the process environment. `DATABASE_URL`
    /// is required; everything else falls back to a local-dev default.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            search: SearchConfig {
                node: env::var("ELASTICSEARCH_NODE")
                    .unwrap_or_else(|_| "http://localhost:9200".to_string()),
                username: env::var("ELASTICSEARCH_USERNAME").ok(),
                password: env::var("ELASTICSEARCH_PASSWORD").ok(),
                index: env::var("ELASTICSEARCH_INDEX").unwrap_or_else(|_| "kyc".to_string()),
            },
        }
    }
}
