//! # lexa-config
//!
//! Layered configuration loading for Lexa using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LEXA_*` prefix, `__` as separator)
//! 2. `NEXT_PUBLIC_API_URL`, honored as an alias for `api.url`
//! 3. Project-level `.lexa/config.toml`
//! 4. User-level `~/.config/lexa/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LEXA_API__URL` -> `api.url`, `LEXA_SESSION__USE_KEYRING` ->
//! `session.use_keyring`, etc. The `__` (double underscore) separates nested
//! config sections.
//!
//! # Usage
//!
//! ```no_run
//! use lexa_config::LexaConfig;
//!
//! let config = LexaConfig::load_with_dotenv().expect("config");
//! if !config.api.is_configured() {
//!     eprintln!("falling back to {}", config.api.base_url());
//! }
//! ```

mod api;
mod error;
mod general;
mod session;

pub use api::{ApiConfig, DEFAULT_API_URL};
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use session::SessionConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Legacy variable the web frontend used for the backend origin.
pub const LEGACY_API_URL_VAR: &str = "NEXT_PUBLIC_API_URL";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LexaConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl LexaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source fails to parse or the API url is
    /// not http(s).
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.api.validate()?;
        Ok(config)
    }

    /// Load `.env` from the current directory first, then [`Self::load`].
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path().filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".lexa/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment = figment.merge(
            Env::raw()
                .only(&[LEGACY_API_URL_VAR])
                .map(|_| "api.url".into()),
        );

        figment.merge(Env::prefixed("LEXA_").split("__"))
    }

    /// Path to the user-global config file.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lexa").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = LexaConfig::default();
        assert!(!config.api.is_configured());
        assert!(config.session.use_keyring);
        assert_eq!(config.general.default_limit, 20);
    }
}
