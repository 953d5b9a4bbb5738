//! # lexa-api
//!
//! REST client for the Lexa legal marketplace.
//!
//! [`ApiClient`] wraps a `reqwest::Client` and the injected
//! [`SessionContext`]. Each resource module adds its endpoints as methods on
//! the client:
//! - authentication (sign-up, sign-in, sign-out)
//! - cases, applications, invitations
//! - comments, documents (with the upload fallback chain), messages
//! - lawyer / client profiles and specialties
//!
//! On top of those sit the [`resolver`] (memoized user-id → name lookup),
//! the [`workflow`] for a case's detail view, and the home-screen
//! [`recommendations`] feed.

pub mod applications;
pub mod auth;
pub mod cases;
pub mod comments;
pub mod documents;
pub mod invitations;
pub mod messages;
pub mod profiles;
pub mod recommendations;
pub mod resolver;
pub mod workflow;

mod error;
mod http;

pub use error::{ApiError, GENERIC_MESSAGE};
pub use http::ERROR_MESSAGE_HEADER;

use lexa_auth::SessionContext;
use lexa_config::ApiConfig;
use reqwest::{Method, RequestBuilder};
use serde::{Serialize, de::DeserializeOwned};

/// HTTP client for the marketplace API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionContext,
}

impl ApiClient {
    /// Build a client for `config`, attaching the bearer token from
    /// `session` to every request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` fails
    /// to build.
    pub fn new(config: &ApiConfig, session: SessionContext) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url().to_string(),
            session,
        })
    }

    #[must_use]
    pub const fn session(&self) -> &SessionContext {
        &self.session
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, format!("{}{path}", self.base_url));
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let resp = builder.send().await?;
        tracing::debug!(status = resp.status().as_u16(), url = %resp.url(), "response");
        http::check_response(resp, &self.session).await
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.execute(self.request(Method::GET, path)).await?;
        http::decode(resp).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self
            .execute(self.request(Method::POST, path).json(body))
            .await?;
        http::decode(resp).await
    }

    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self
            .execute(self.request(Method::PUT, path).json(body))
            .await?;
        http::decode(resp).await
    }

    /// PUT with no body, as the status-transition endpoints expect.
    pub(crate) async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.execute(self.request(Method::PUT, path)).await?;
        http::decode(resp).await
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        let resp = self
            .execute(self.request(Method::POST, path).multipart(form))
            .await?;
        http::decode(resp).await
    }
}
