use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// The database settings are deliberately optional: when either is missing
/// the process still starts and the storage gateway runs degraded (see
/// [`crate::db::Storage::connect`]).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            database_name: optional_env("DATABASE_NAME"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an environment variable, treating "unset" and "empty" the same way.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
