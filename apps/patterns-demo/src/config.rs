//! Configuration for the demo binary.
//!
//! Environment variables are read and validated once at startup so a bad
//! value fails fast instead of surfacing mid-run.

use std::env;
use std::time::Duration;

/// Log output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn from_str(s: &str) -> Self {
        if s.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
#[error("Configuration error for {field}: {message}")]
pub struct ConfigError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Log format (default: pretty)
    pub log_format: LogFormat,
    /// Simulated latency of the backing user store (default: 0)
    pub db_latency: Duration,
    /// User ids looked up through the proxy before any requested ids
    pub cache_preload: Vec<String>,
}

impl Config {
    /// Load and validate configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_format = LogFormat::from_str(&get("LOG_FORMAT").unwrap_or_else(|| "pretty".into()));

        let db_latency = match get("DB_LATENCY_MS") {
            None => Duration::ZERO,
            Some(raw) => {
                let ms: u64 = raw.trim().parse().map_err(|e| ConfigError {
                    field: "DB_LATENCY_MS",
                    message: format!("Invalid milliseconds '{}': {}", raw, e),
                })?;
                Duration::from_millis(ms)
            }
        };

        let cache_preload = get("CACHE_PRELOAD")
            .map(|s| parse_id_list(&s))
            .unwrap_or_default();

        Ok(Self {
            log_format,
            db_latency,
            cache_preload,
        })
    }
}

fn parse_id_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect()
}
