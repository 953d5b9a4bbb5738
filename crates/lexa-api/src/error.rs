//! API error taxonomy.

use lexa_auth::AuthError;
use lexa_core::errors::CoreError;
use thiserror::Error;

/// Fallback text when the server gives no usable message.
pub const GENERIC_MESSAGE: &str = "the request could not be completed";

/// Errors returned by [`crate::ApiClient`]. None are retried.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 401. The session has already been torn down when this is returned.
    #[error("session rejected by the server; run `lexa auth sign-in`")]
    Unauthorized,

    /// 403 outside of uploads.
    #[error("forbidden: {message}")]
    Forbidden { message: String },

    #[error("not found: {message}")]
    NotFound { message: String },

    #[error("server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Any other non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Rejected locally before any request was sent.
    #[error(transparent)]
    Validation(#[from] CoreError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// 403 while uploading: the case no longer accepts changes.
    #[error("case locked: {message}")]
    CaseLocked { message: String },

    /// 500 from the upload fallback.
    #[error("upload failed: {message}")]
    UploadFailed { message: String },
}

impl ApiError {
    /// Best-effort human message: what the server said when it said
    /// anything, else a generic line.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Forbidden { message }
            | Self::NotFound { message }
            | Self::ServerError { message, .. }
            | Self::Api { message, .. }
            | Self::CaseLocked { message }
            | Self::UploadFailed { message }
                if !message.trim().is_empty() =>
            {
                message.clone()
            }
            Self::Unauthorized
            | Self::Validation(_)
            | Self::Auth(_)
            | Self::Decode(_)
            | Self::Io(_) => self.to_string(),
            Self::Http(error) if error.is_timeout() => "the server did not answer in time".into(),
            _ => GENERIC_MESSAGE.into(),
        }
    }

    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Forbidden { .. } | Self::CaseLocked { .. } => Some(403),
            Self::NotFound { .. } => Some(404),
            Self::ServerError { status, .. } | Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_server_text() {
        let err = ApiError::Forbidden {
            message: "Solo el cliente puede cerrar el caso".into(),
        };
        assert_eq!(err.user_message(), "Solo el cliente puede cerrar el caso");
    }

    #[test]
    fn user_message_falls_back_to_generic() {
        let err = ApiError::Api {
            status: 409,
            message: "  ".into(),
        };
        assert_eq!(err.user_message(), GENERIC_MESSAGE);
    }

    #[test]
    fn validation_is_reported_verbatim() {
        let err = ApiError::from(CoreError::Validation("message must not be empty".into()));
        assert_eq!(err.user_message(), "Validation error: message must not be empty");
        assert_eq!(err.status(), None);
    }
}
