use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use lexa_config::SessionConfig;
use lexa_core::entities::{AuthenticatedUser, UserAccount};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

const KEYRING_USER: &str = "bearer-token";
const SESSION_FILE_NAME: &str = "session.json";

/// Env var that overrides whatever token is stored.
pub const TOKEN_ENV_VAR: &str = "LEXA_AUTH__TOKEN";

/// Signed-in state that survives between runs.
#[derive(Clone, PartialEq, Eq)]
pub struct StoredSession {
    pub token: String,
    /// Absent when the token came from the environment with no prior sign-in.
    pub user: Option<UserAccount>,
}

impl StoredSession {
    #[must_use]
    pub fn from_sign_in(user: AuthenticatedUser) -> Self {
        let AuthenticatedUser {
            id,
            username,
            roles,
            token,
        } = user;
        Self {
            token,
            user: Some(UserAccount {
                id,
                username,
                roles,
            }),
        }
    }
}

impl fmt::Debug for StoredSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredSession")
            .field("token", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}

/// Where the active token was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Env,
    Keyring,
    File,
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Env => "env",
            Self::Keyring => "keyring",
            Self::File => "file",
        })
    }
}

/// On-disk shape of `session.json`. The token is only written here when the
/// keyring is disabled or refused it.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user: Option<UserAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
}

/// Persists the `token` + `user` pair.
///
/// Token lookup order: `LEXA_AUTH__TOKEN` → keyring → `session.json`.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    dir: PathBuf,
    keyring_service: Option<String>,
}

impl CredentialStore {
    /// # Errors
    ///
    /// Returns [`AuthError::TokenStoreError`] when no credentials directory
    /// is configured and no home directory can be found.
    pub fn from_config(config: &SessionConfig) -> Result<Self, AuthError> {
        let dir = config.credentials_path().ok_or_else(|| {
            AuthError::TokenStoreError("home directory not found; cannot store credentials".into())
        })?;
        Ok(Self {
            dir,
            keyring_service: config.use_keyring.then(|| config.keyring_service.clone()),
        })
    }

    /// File-only store rooted at `dir`.
    #[must_use]
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            keyring_service: None,
        }
    }

    #[must_use]
    pub fn session_path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE_NAME)
    }

    /// Load the persisted session, if any token can be found.
    #[must_use]
    pub fn load(&self) -> Option<StoredSession> {
        let file = self.read_file();
        let user = file.as_ref().and_then(|f| f.user.clone());
        let (token, source) = self.find_token(file.and_then(|f| f.token))?;
        tracing::debug!(%source, "loaded session token");
        Some(StoredSession { token, user })
    }

    /// Persist a session. Tries the keyring first and falls back to the file.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenStoreError`] if the session file cannot be written.
    pub fn save(&self, session: &StoredSession) -> Result<(), AuthError> {
        let in_keyring = self.keyring_store(&session.token);
        let file = SessionFile {
            user: session.user.clone(),
            token: (!in_keyring).then(|| session.token.clone()),
        };
        self.write_file(&file)
    }

    /// Remove the session from the keyring and the file.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenStoreError`] if the session file cannot be removed.
    pub fn clear(&self) -> Result<(), AuthError> {
        if let Some(entry) = self.keyring_entry() {
            // may not exist
            let _ = entry.delete_credential();
        }
        let path = self.session_path();
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                AuthError::TokenStoreError(format!("failed to delete {}: {e}", path.display()))
            })?;
        }
        Ok(())
    }

    /// Which tier the current token comes from (for status display).
    #[must_use]
    pub fn token_source(&self) -> Option<TokenSource> {
        self.find_token(self.read_file().and_then(|f| f.token))
            .map(|(_, source)| source)
    }

    fn find_token(&self, file_token: Option<String>) -> Option<(String, TokenSource)> {
        if let Some(token) = std::env::var(TOKEN_ENV_VAR).ok().filter(|t| !t.is_empty()) {
            return Some((token, TokenSource::Env));
        }
        if let Some(token) = self
            .keyring_entry()
            .and_then(|entry| entry.get_password().ok())
            .filter(|t| !t.is_empty())
        {
            return Some((token, TokenSource::Keyring));
        }
        file_token
            .filter(|t| !t.trim().is_empty())
            .map(|t| (t, TokenSource::File))
    }

    fn keyring_entry(&self) -> Option<keyring::Entry> {
        let service = self.keyring_service.as_deref()?;
        match keyring::Entry::new(service, KEYRING_USER) {
            Ok(entry) => Some(entry),
            Err(error) => {
                tracing::debug!(%error, "keyring unavailable");
                None
            }
        }
    }

    fn keyring_store(&self, token: &str) -> bool {
        let Some(entry) = self.keyring_entry() else {
            return false;
        };
        match entry.set_password(token) {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(%error, "keyring store failed; falling back to file");
                false
            }
        }
    }

    fn read_file(&self) -> Option<SessionFile> {
        let path = self.session_path();
        let raw = fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(file) => Some(file),
            Err(error) => {
                tracing::warn!(%error, path = %path.display(), "ignoring unreadable session file");
                None
            }
        }
    }

    fn write_file(&self, file: &SessionFile) -> Result<(), AuthError> {
        create_private_dir(&self.dir)?;
        let path = self.session_path();
        let body = serde_json::to_vec_pretty(file)
            .map_err(|e| AuthError::TokenStoreError(format!("encode session: {e}")))?;
        fs::write(&path, body)
            .map_err(|e| AuthError::TokenStoreError(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                AuthError::TokenStoreError(format!("chmod {}: {e}", path.display()))
            })?;
        }

        Ok(())
    }
}

fn create_private_dir(dir: &Path) -> Result<(), AuthError> {
    fs::create_dir_all(dir)
        .map_err(|e| AuthError::TokenStoreError(format!("mkdir {}: {e}", dir.display())))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Err(e) = fs::set_permissions(dir, fs::Permissions::from_mode(0o700)) {
            tracing::warn!("failed to chmod 0700 {}: {e}", dir.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn session() -> StoredSession {
        StoredSession::from_sign_in(AuthenticatedUser {
            id: "u1".into(),
            username: "ana".into(),
            roles: vec!["ROLE_CLIENT".into()],
            token: "tok-123".into(),
        })
    }

    #[test]
    fn from_config_respects_keyring_toggle() {
        let config = SessionConfig {
            use_keyring: false,
            credentials_dir: Some("/tmp/lexa-test".into()),
            ..SessionConfig::default()
        };
        let store = CredentialStore::from_config(&config).unwrap();
        assert!(store.keyring_service.is_none());
        assert_eq!(store.session_path(), PathBuf::from("/tmp/lexa-test/session.json"));
    }

    #[test]
    fn file_store_load_clear_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = CredentialStore::in_dir(tmp.path().join("creds"));

        assert!(store.load().is_none());
        store.save(&session()).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, session());
        assert_eq!(store.token_source(), Some(TokenSource::File));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(store.session_path())
                .unwrap()
                .permissions()
                .mode()
                & 0o777;
            assert_eq!(mode, 0o600, "session file should be 0600");
        }

        store.clear().unwrap();
        assert!(!store.session_path().exists());
        assert!(store.load().is_none());
        // clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn corrupt_file_is_ignored() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = CredentialStore::in_dir(tmp.path());
        fs::write(store.session_path(), "{not json").unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn debug_output_redacts_token() {
        assert!(!format!("{:?}", session()).contains("tok-123"));
    }
}
