//! # lexa-auth
//!
//! Session lifecycle for the Lexa CLI.
//!
//! A [`CredentialStore`] persists the signed-in user between runs (bearer
//! token in the OS keyring when available, user blob in
//! `~/.lexa/session.json`). A [`SessionContext`] is loaded once at start-up
//! and injected into the API client, which tears it down on sign-out or on
//! any 401.

pub mod credential_store;
pub mod error;
pub mod expiry;
pub mod session;

pub use credential_store::{CredentialStore, StoredSession, TokenSource};
pub use error::AuthError;
pub use expiry::{is_near_expiry, token_expiry};
pub use session::SessionContext;
