//! Memoized user-id → display-name resolution.
//!
//! Document uploaders, comment authors, applicants and case parties are all
//! plain user ids on the wire. A name is found by asking the lawyer
//! directory first, then the client directory, and falling back to a
//! truncated-id placeholder. Each id is looked up at most once per resolver.

use std::collections::HashMap;
use std::future::Future;

use lexa_core::entities::{ClientProfile, LawyerProfile};

use crate::{ApiClient, ApiError};

/// Where profiles are looked up.
pub trait ProfileDirectory {
    fn lawyer(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<LawyerProfile, ApiError>> + Send;

    fn client(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<ClientProfile, ApiError>> + Send;
}

impl ProfileDirectory for ApiClient {
    fn lawyer(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<LawyerProfile, ApiError>> + Send {
        self.lawyer_by_user(user_id)
    }

    fn client(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<ClientProfile, ApiError>> + Send {
        self.client_by_user(user_id)
    }
}

impl<T: ProfileDirectory + Sync> ProfileDirectory for &T {
    fn lawyer(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<LawyerProfile, ApiError>> + Send {
        (**self).lawyer(user_id)
    }

    fn client(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<ClientProfile, ApiError>> + Send {
        (**self).client(user_id)
    }
}

/// `Usuario (1a2b3c4d...)`, shown when neither directory knows the id.
#[must_use]
pub fn placeholder_name(user_id: &str) -> String {
    let short: String = user_id.chars().take(8).collect();
    format!("Usuario ({short}...)")
}

pub struct ProfileResolver<D> {
    directory: D,
    names: HashMap<String, String>,
}

impl<D: ProfileDirectory> ProfileResolver<D> {
    pub fn new(directory: D) -> Self {
        Self {
            directory,
            names: HashMap::new(),
        }
    }

    /// Seed the cache from an already-fetched lawyer list.
    pub fn prime_lawyers<'a>(&mut self, lawyers: impl IntoIterator<Item = &'a LawyerProfile>) {
        for lawyer in lawyers {
            self.names
                .insert(lawyer.user_id.clone(), lawyer.full_name.display());
        }
    }

    #[must_use]
    pub fn cached(&self, user_id: &str) -> Option<&str> {
        self.names.get(user_id).map(String::as_str)
    }

    /// Resolve one id. Lookup failures fall through to the next source; only
    /// a 401 is propagated, since the session is gone at that point.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] if either lookup was rejected.
    pub async fn resolve(&mut self, user_id: &str) -> Result<String, ApiError> {
        if let Some(name) = self.names.get(user_id) {
            return Ok(name.clone());
        }
        let name = self.lookup(user_id).await?;
        self.names.insert(user_id.to_string(), name.clone());
        Ok(name)
    }

    async fn lookup(&self, user_id: &str) -> Result<String, ApiError> {
        match self.directory.lawyer(user_id).await {
            Ok(lawyer) => return Ok(lawyer.full_name.display()),
            Err(ApiError::Unauthorized) => return Err(ApiError::Unauthorized),
            Err(error) => tracing::debug!(user_id, %error, "no lawyer profile"),
        }
        match self.directory.client(user_id).await {
            Ok(client) => return Ok(client.full_name.display()),
            Err(ApiError::Unauthorized) => return Err(ApiError::Unauthorized),
            Err(error) => tracing::debug!(user_id, %error, "no client profile"),
        }
        tracing::warn!(user_id, "no profile found; using placeholder name");
        Ok(placeholder_name(user_id))
    }

    /// Resolve several ids, each looked up once even if repeated.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] if any lookup was rejected.
    pub async fn resolve_many<'a>(
        &mut self,
        user_ids: impl IntoIterator<Item = &'a str>,
    ) -> Result<HashMap<String, String>, ApiError> {
        let mut out = HashMap::new();
        for id in user_ids {
            if id.is_empty() || out.contains_key(id) {
                continue;
            }
            let name = self.resolve(id).await?;
            out.insert(id.to_string(), name);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexa_core::entities::{ContactInfo, FullName};
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeDirectory {
        lawyers: Vec<LawyerProfile>,
        clients: Vec<ClientProfile>,
        calls: Mutex<Vec<String>>,
        reject_all: bool,
    }

    fn name(first: &str, last: &str) -> FullName {
        FullName {
            firstname: first.into(),
            lastname: last.into(),
        }
    }

    fn lawyer(user_id: &str, first: &str, last: &str) -> LawyerProfile {
        LawyerProfile {
            id: user_id.into(),
            user_id: user_id.into(),
            full_name: name(first, last),
            dni: String::new(),
            contact_info: ContactInfo::default(),
            description: String::new(),
            specialties: vec![],
        }
    }

    fn client(user_id: &str, first: &str, last: &str) -> ClientProfile {
        ClientProfile {
            id: user_id.into(),
            user_id: user_id.into(),
            full_name: name(first, last),
            dni: String::new(),
            contact_info: ContactInfo::default(),
        }
    }

    fn missing(user_id: &str) -> ApiError {
        ApiError::NotFound {
            message: user_id.to_string(),
        }
    }

    impl ProfileDirectory for FakeDirectory {
        async fn lawyer(&self, user_id: &str) -> Result<LawyerProfile, ApiError> {
            self.calls.lock().unwrap().push(format!("lawyer:{user_id}"));
            if self.reject_all {
                return Err(ApiError::Unauthorized);
            }
            self.lawyers
                .iter()
                .find(|l| l.user_id == user_id)
                .cloned()
                .ok_or_else(|| missing(user_id))
        }

        async fn client(&self, user_id: &str) -> Result<ClientProfile, ApiError> {
            self.calls.lock().unwrap().push(format!("client:{user_id}"));
            self.clients
                .iter()
                .find(|c| c.user_id == user_id)
                .cloned()
                .ok_or_else(|| missing(user_id))
        }
    }

    #[tokio::test]
    async fn lawyer_profile_wins_over_client_profile() {
        let directory = FakeDirectory {
            lawyers: vec![lawyer("u1", "Luis", "Rojas")],
            clients: vec![client("u1", "Otro", "Nombre")],
            ..FakeDirectory::default()
        };
        let mut resolver = ProfileResolver::new(&directory);
        assert_eq!(resolver.resolve("u1").await.unwrap(), "Luis Rojas");
        assert_eq!(*directory.calls.lock().unwrap(), vec!["lawyer:u1"]);
    }

    #[tokio::test]
    async fn falls_back_to_client_then_placeholder() {
        let directory = FakeDirectory {
            clients: vec![client("c-1", "Ana", "Paz")],
            ..FakeDirectory::default()
        };
        let mut resolver = ProfileResolver::new(&directory);
        assert_eq!(resolver.resolve("c-1").await.unwrap(), "Ana Paz");
        assert_eq!(
            resolver.resolve("0123456789abcdef").await.unwrap(),
            "Usuario (01234567...)"
        );
    }

    #[tokio::test]
    async fn each_id_is_looked_up_once() {
        let directory = FakeDirectory {
            lawyers: vec![lawyer("u1", "Luis", "Rojas")],
            ..FakeDirectory::default()
        };
        let mut resolver = ProfileResolver::new(&directory);
        let names = resolver
            .resolve_many(["u1", "u1", "ghost", "ghost", ""])
            .await
            .unwrap();
        assert_eq!(names.len(), 2);
        resolver.resolve("u1").await.unwrap();
        resolver.resolve("ghost").await.unwrap();
        assert_eq!(
            *directory.calls.lock().unwrap(),
            vec!["lawyer:u1", "lawyer:ghost", "client:ghost"]
        );
    }

    #[tokio::test]
    async fn primed_lawyers_skip_the_network() {
        let directory = FakeDirectory::default();
        let mut resolver = ProfileResolver::new(&directory);
        let listed = [lawyer("u9", "Eva", "Luna")];
        resolver.prime_lawyers(&listed);
        assert_eq!(resolver.resolve("u9").await.unwrap(), "Eva Luna");
        assert!(directory.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unauthorized_is_propagated() {
        let directory = FakeDirectory {
            reject_all: true,
            ..FakeDirectory::default()
        };
        let mut resolver = ProfileResolver::new(&directory);
        assert!(matches!(
            resolver.resolve("u1").await,
            Err(ApiError::Unauthorized)
        ));
        assert!(resolver.cached("u1").is_none());
    }

    #[test]
    fn placeholder_handles_short_ids() {
        assert_eq!(placeholder_name("abc"), "Usuario (abc...)");
    }
}
