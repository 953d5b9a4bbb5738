//! Marketplace API connection settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Origin used when no URL is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

fn default_user_agent() -> String {
    concat!("lexa/", env!("CARGO_PKG_VERSION")).to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Backend origin, e.g. `https://api.example.com`. Empty means
    /// [`DEFAULT_API_URL`].
    #[serde(default)]
    pub url: String,

    /// Per-request timeout in seconds. `0` disables it.
    #[serde(default)]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            timeout_secs: 0,
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Whether an origin was set explicitly rather than defaulted.
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty()
    }

    /// The origin to talk to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        let url = self.url.trim();
        if url.is_empty() {
            DEFAULT_API_URL
        } else {
            url.trim_end_matches('/')
        }
    }

    pub const fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }

    /// Reject origins that are not http(s).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for any other scheme.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url();
        if url.starts_with("http://") || url.starts_with("https://") {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "api.url".into(),
                reason: format!("'{url}' must start with http:// or https://"),
            })
        }
    }
}
