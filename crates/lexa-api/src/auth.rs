//! Authentication endpoints.

use lexa_core::entities::{AuthenticatedUser, UserAccount};
use lexa_core::enums::Role;
use lexa_core::requests::{SignInRequest, SignUpRequest};
use lexa_core::validation::validate_passwords;

use crate::{ApiClient, ApiError};

/// Sign-up form as typed by the user.
#[derive(Debug, Clone)]
pub struct SignUpForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

impl ApiClient {
    /// Register a new account. Passwords are compared before any request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] on a mismatch, or the server's error.
    pub async fn sign_up(&self, form: SignUpForm) -> Result<UserAccount, ApiError> {
        validate_passwords(&form.password, &form.confirm_password)?;
        let body = SignUpRequest::new(form.username, form.password, form.role);
        self.post_json("/api/v1/authentication/sign-up", &body).await
    }

    /// Sign in and adopt the returned session.
    ///
    /// # Errors
    ///
    /// Returns the server's error, or [`ApiError::Auth`] if the session could
    /// not be persisted.
    pub async fn sign_in(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, ApiError> {
        let body = SignInRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let user: AuthenticatedUser = self
            .post_json("/api/v1/authentication/sign-in", &body)
            .await?;
        if user.token.is_empty() {
            return Err(ApiError::Decode("sign-in returned no token".into()));
        }
        self.session().begin(user.clone())?;
        tracing::info!(user = %user.username, role = %user.role(), "signed in");
        Ok(user)
    }

    /// Forget the local session. No request is made.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Auth`] if the persisted session cannot be removed.
    pub fn sign_out(&self) -> Result<(), ApiError> {
        self.session().end()?;
        Ok(())
    }
}
