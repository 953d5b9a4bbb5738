use anyhow::Context;
use lexa_api::ApiClient;
use lexa_auth::{CredentialStore, SessionContext};
use lexa_config::LexaConfig;
use lexa_core::entities::UserAccount;
use lexa_core::permissions::Viewer;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: LexaConfig,
    pub session: SessionContext,
    pub client: ApiClient,
}

impl AppContext {
    /// Restore the persisted session and build the API client around it.
    pub fn init(config: LexaConfig) -> anyhow::Result<Self> {
        let session = match CredentialStore::from_config(&config.session) {
            Ok(store) => SessionContext::init(store),
            Err(error) => {
                tracing::warn!(%error, "credential store unavailable; session will not persist");
                SessionContext::in_memory(None)
            }
        };
        let client = ApiClient::new(&config.api, session.clone())
            .context("failed to build marketplace API client")?;
        tracing::debug!(api = client.base_url(), "client ready");
        Ok(Self {
            config,
            session,
            client,
        })
    }

    pub fn require_user(&self) -> anyhow::Result<UserAccount> {
        Ok(self.session.require_user()?)
    }

    pub fn require_viewer(&self) -> anyhow::Result<Viewer> {
        Ok(self.session.require_viewer()?)
    }
}
