use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not signed in; run `lexa auth sign-in`")]
    NotAuthenticated,

    #[error("session expired; run `lexa auth sign-in` again")]
    TokenExpired,

    #[error("keyring error: {0}")]
    KeyringError(String),

    #[error("token store error: {0}")]
    TokenStoreError(String),

    #[error("invalid token: {0}")]
    InvalidToken(String),
}
