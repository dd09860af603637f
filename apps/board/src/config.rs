use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a default; a `.env` file is honoured when present.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON dataset overriding the bundled one.
    pub jobs_data_path: Option<PathBuf>,
    /// Directory relative logo paths resolve against. `None` trusts every relative logo.
    pub logo_dir: Option<PathBuf>,
    pub max_sessions: usize,
    /// Boards untouched for this long are evicted.
    pub idle_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            jobs_data_path: optional_env("JOBS_DATA_PATH").map(PathBuf::from),
            logo_dir: optional_env("LOGO_DIR").map(PathBuf::from),
            max_sessions: std::env::var("MAX_SESSIONS")
                .unwrap_or_else(|_| "1024".to_string())
                .parse::<usize>()
                .context("MAX_SESSIONS must be a non-negative integer")?,
            idle_timeout_secs: std::env::var("IDLE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "1800".to_string())
                .parse::<u64>()
                .context("IDLE_TIMEOUT_SECS must be a non-negative integer")?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            jobs_data_path: None,
            logo_dir: None,
            max_sessions: 1024,
            idle_timeout_secs: 1800,
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
