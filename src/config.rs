//! Runtime configuration
//!
//! Read once at startup from `FOODSCAN_*` environment variables.

use std::time::Duration;

use crate::build_info;

/// Default product lookup endpoint (Open Food Facts v0 API)
pub const DEFAULT_API_BASE_URL: &str = "https://world.openfoodfacts.org/api/v0/product/";

/// Default HTTP timeout for a single lookup
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Service configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base_url: String,
    pub http_timeout: Duration,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", build_info::NAME, build_info::VERSION)
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = lookup("FOODSCAN_API_BASE_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.api_base_url);

        let http_timeout = match lookup("FOODSCAN_HTTP_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(
                        "Invalid FOODSCAN_HTTP_TIMEOUT_SECS '{}', using {}s",
                        raw,
                        DEFAULT_TIMEOUT_SECS
                    );
                    defaults.http_timeout
                }
            },
            None => defaults.http_timeout,
        };

        let user_agent = lookup("FOODSCAN_USER_AGENT")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.user_agent);

        Self {
            api_base_url,
            http_timeout,
            user_agent,
        }
    }
}
