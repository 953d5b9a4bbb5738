use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::InvitationStatus;
use crate::wire;

/// A client's solicitation to a specific lawyer for one of their cases.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    #[serde(deserialize_with = "wire::id::deserialize")]
    #[schemars(with = "String")]
    pub id: String,
    #[serde(deserialize_with = "wire::id::deserialize")]
    #[schemars(with = "String")]
    pub case_id: String,
    #[serde(deserialize_with = "wire::id::deserialize")]
    #[schemars(with = "String")]
    pub lawyer_id: String,
    #[serde(default)]
    pub message: String,
    pub status: InvitationStatus,
    #[serde(deserialize_with = "wire::timestamp::deserialize")]
    #[schemars(with = "DateTime<Utc>")]
    pub created_at: DateTime<Utc>,
}
