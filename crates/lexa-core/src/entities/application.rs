use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ApplicationStatus;
use crate::wire;

/// A lawyer's unsolicited proposal to take an OPEN case.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Application {
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
    pub status: ApplicationStatus,
    #[serde(
        default,
        deserialize_with = "wire::timestamp_option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub created_at: Option<DateTime<Utc>>,
}
