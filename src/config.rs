//! Runtime configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_WEATHER_URL: &str = "https://wttr.in";
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 10_000;
pub const USAGE_FILE_NAME: &str = ".order_usage.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub weather_url: String,
    pub http_timeout: Duration,
    /// `None` when no home directory is known and no override is set.
    pub usage_file: Option<PathBuf>,
    pub usage_disabled: bool,
    /// Fixed seed for reproducible pong matches.
    pub pong_seed: Option<u64>,
    /// Write logs here instead of stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weather_url: DEFAULT_WEATHER_URL.to_string(),
            http_timeout: Duration::from_millis(DEFAULT_HTTP_TIMEOUT_MS),
            usage_file: None,
            usage_disabled: false,
            pong_seed: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let weather_url = non_empty("ORDER_WEATHER_URL")
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_WEATHER_URL.to_string());

        let http_timeout = non_empty("ORDER_HTTP_TIMEOUT_MS")
            .and_then(|s| s.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_millis(DEFAULT_HTTP_TIMEOUT_MS));

        let usage_file = non_empty("ORDER_USAGE_FILE")
            .map(PathBuf::from)
            .or_else(|| non_empty("HOME").map(|home| PathBuf::from(home).join(USAGE_FILE_NAME)));

        let usage_disabled = non_empty("ORDER_USAGE_DISABLED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let pong_seed = non_empty("ORDER_PONG_SEED").and_then(|s| s.parse().ok());

        let log_file = non_empty("ORDER_LOG_FILE").map(PathBuf::from);

        Self {
            weather_url,
            http_timeout,
            usage_file,
            usage_disabled,
            pong_seed,
            log_file,
        }
    }
}
