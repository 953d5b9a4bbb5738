//! The injected session context.
//!
//! One [`SessionContext`] is created at start-up with [`SessionContext::init`]
//! and cloned into everything that needs the current user. Sign-in, sign-out
//! and a 401 from the API are the only places it changes.

use std::sync::{Arc, PoisonError, RwLock};

use lexa_core::entities::{AuthenticatedUser, UserAccount};
use lexa_core::enums::Role;
use lexa_core::permissions::Viewer;

use crate::credential_store::{CredentialStore, StoredSession};
use crate::error::AuthError;

#[derive(Debug, Default)]
struct Inner {
    store: Option<CredentialStore>,
    current: RwLock<Option<StoredSession>>,
}

/// Cheaply cloneable handle to the process-wide session.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    inner: Arc<Inner>,
}

impl SessionContext {
    /// Load whatever session `store` holds.
    #[must_use]
    pub fn init(store: CredentialStore) -> Self {
        let current = store.load();
        if current.is_some() {
            tracing::debug!("restored persisted session");
        }
        Self {
            inner: Arc::new(Inner {
                store: Some(store),
                current: RwLock::new(current),
            }),
        }
    }

    /// A session that lives only in memory.
    #[must_use]
    pub fn in_memory(session: Option<StoredSession>) -> Self {
        Self {
            inner: Arc::new(Inner {
                store: None,
                current: RwLock::new(session),
            }),
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Option<StoredSession>> {
        self.inner
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn replace(&self, next: Option<StoredSession>) {
        *self
            .inner
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = next;
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.read().as_ref().map(|s| s.token.clone())
    }

    #[must_use]
    pub fn user(&self) -> Option<UserAccount> {
        self.read().as_ref().and_then(|s| s.user.clone())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }

    #[must_use]
    pub fn viewer(&self) -> Option<Viewer> {
        self.user()
            .map(|u| Viewer::new(u.id, Role::primary(&u.roles)))
    }

    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] when nobody is signed in.
    pub fn require_user(&self) -> Result<UserAccount, AuthError> {
        self.user().ok_or(AuthError::NotAuthenticated)
    }

    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] when nobody is signed in.
    pub fn require_viewer(&self) -> Result<Viewer, AuthError> {
        self.viewer().ok_or(AuthError::NotAuthenticated)
    }

    /// Adopt a fresh sign-in and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenStoreError`] if persisting fails. The
    /// in-memory session is set either way.
    pub fn begin(&self, user: AuthenticatedUser) -> Result<(), AuthError> {
        let session = StoredSession::from_sign_in(user);
        let saved = self
            .inner
            .store
            .as_ref()
            .map_or(Ok(()), |store| store.save(&session));
        self.replace(Some(session));
        saved
    }

    /// Explicit sign-out.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenStoreError`] if the persisted copy cannot be
    /// removed. Memory is cleared either way.
    pub fn end(&self) -> Result<(), AuthError> {
        self.replace(None);
        self.inner
            .store
            .as_ref()
            .map_or(Ok(()), CredentialStore::clear)
    }

    /// Forced teardown after the API rejected the token.
    pub fn invalidate(&self) {
        tracing::warn!("session rejected by the server; signing out");
        if let Err(error) = self.end() {
            tracing::warn!(%error, "failed to clear persisted session");
        }
    }
}
