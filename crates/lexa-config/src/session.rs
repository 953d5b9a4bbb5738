//! Where the signed-in session is persisted.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const fn default_use_keyring() -> bool {
    true
}

fn default_keyring_service() -> String {
    "lexa-cli".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Store the bearer token in the OS keyring when available.
    #[serde(default = "default_use_keyring")]
    pub use_keyring: bool,

    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,

    /// Directory holding `session.json`. Defaults to `~/.lexa`.
    #[serde(default)]
    pub credentials_dir: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            use_keyring: default_use_keyring(),
            keyring_service: default_keyring_service(),
            credentials_dir: None,
        }
    }
}

impl SessionConfig {
    /// Resolved credentials directory, or `None` when no home dir exists.
    pub fn credentials_path(&self) -> Option<PathBuf> {
        match self.credentials_dir.as_deref() {
            Some(dir) if !dir.trim().is_empty() => Some(PathBuf::from(dir)),
            _ => dirs::home_dir().map(|home| home.join(".lexa")),
        }
    }
}
