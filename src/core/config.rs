//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Leptos' own settings (site address, asset paths) still come from
//! `[package.metadata.leptos]` and the `LEPTOS_*` variables.

/// Default `tracing` filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default `Cache-Control` max-age for the `/pkg` bundle, in seconds
pub const DEFAULT_STATIC_MAX_AGE: u64 = 3600;

/// Error raised when an environment variable holds an unusable value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a boolean (true/false/1/0/yes/no/on/off), got {value:?}")]
    InvalidBool { key: &'static str, value: String },

    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing` env-filter directive
    /// Example: info,glz_landing=debug,tower_http=debug
    pub log_filter: String,

    /// Whether responses are compressed (brotli + gzip)
    pub compression: bool,

    /// `Cache-Control: max-age` for the compiled bundle, in seconds
    pub static_max_age: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup("RUST_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let compression = match lookup("GLZ_COMPRESSION") {
            Some(value) => parse_bool("GLZ_COMPRESSION", &value)?,
            None => true,
        };

        let static_max_age = match lookup("GLZ_STATIC_MAX_AGE") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidNumber {
                    key: "GLZ_STATIC_MAX_AGE",
                    value,
                })?,
            None => DEFAULT_STATIC_MAX_AGE,
        };

        Ok(Self {
            log_filter,
            compression,
            static_max_age,
        })
    }

    /// Header value for static bundle responses
    pub fn cache_control(&self) -> String {
        if self.static_max_age == 0 {
            "no-cache".to_string()
        } else {
            format!("public, max-age={}", self.static_max_age)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            compression: true,
            static_max_age: DEFAULT_STATIC_MAX_AGE,
        }
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
    }
}
