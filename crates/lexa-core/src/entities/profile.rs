use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::wire;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
pub struct FullName {
    pub firstname: String,
    pub lastname: String,
}

impl FullName {
    /// `"{firstname} {lastname}"`, the form every view displays.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default, alias = "phone")]
    pub phone_number: String,
    #[serde(default)]
    pub address: String,
}

/// Lawyer-specific extension of a user account.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LawyerProfile {
    #[serde(default, deserialize_with = "wire::id::deserialize")]
    #[schemars(with = "String")]
    pub id: String,
    pub user_id: String,
    pub full_name: FullName,
    #[serde(default)]
    pub dni: String,
    #[serde(default)]
    pub contact_info: ContactInfo,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub specialties: Vec<String>,
}

/// Client-specific extension of a user account.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfile {
    #[serde(default, deserialize_with = "wire::id::deserialize")]
    #[schemars(with = "String")]
    pub id: String,
    pub user_id: String,
    pub full_name: FullName,
    #[serde(default)]
    pub dni: String,
    #[serde(default)]
    pub contact_info: ContactInfo,
}

/// Categorical tag (e.g. `CRIMINAL_LAW`) used for filtering and matching.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Specialty {
    pub id: i64,
    pub name: String,
}

impl Specialty {
    #[must_use]
    pub fn display_name(&self) -> &str {
        crate::enums::specialty_display_name(&self.name)
    }
}

/// Either kind of profile, as found by a lookup on user id.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Profile {
    Lawyer(LawyerProfile),
    Client(ClientProfile),
}

impl Profile {
    #[must_use]
    pub fn user_id(&self) -> &str {
        match self {
            Self::Lawyer(p) => &p.user_id,
            Self::Client(p) => &p.user_id,
        }
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::Lawyer(p) => p.full_name.display(),
            Self::Client(p) => p.full_name.display(),
        }
    }
}
