use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Role;
use crate::permissions::Viewer;
use crate::wire;

/// Account returned by sign-up.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserAccount {
    #[serde(deserialize_with = "wire::id::deserialize")]
    #[schemars(with = "String")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Account returned by sign-in, carrying the bearer token.
///
/// This is the blob persisted between runs; the token is attached as
/// `Authorization: Bearer <token>` to every subsequent request.
#[derive(Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuthenticatedUser {
    #[serde(deserialize_with = "wire::id::deserialize")]
    #[schemars(with = "String")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub token: String,
}

impl AuthenticatedUser {
    #[must_use]
    pub fn role(&self) -> Role {
        Role::primary(&self.roles)
    }

    #[must_use]
    pub fn viewer(&self) -> Viewer {
        Viewer::new(self.id.clone(), self.role())
    }
}

impl std::fmt::Debug for AuthenticatedUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticatedUser")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("roles", &self.roles)
            .field("token", &"<redacted>")
            .finish()
    }
}
