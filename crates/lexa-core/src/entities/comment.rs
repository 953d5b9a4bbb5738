use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::CommentType;
use crate::wire;

/// A general or final annotation on a case. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(deserialize_with = "wire::id::deserialize")]
    #[schemars(with = "String")]
    pub id: String,
    #[serde(deserialize_with = "wire::id::deserialize")]
    #[schemars(with = "String")]
    pub case_id: String,
    #[serde(deserialize_with = "wire::id::deserialize")]
    #[schemars(with = "String")]
    pub author_id: String,
    pub content: String,
    #[serde(rename = "type")]
    pub comment_type: CommentType,
    #[serde(deserialize_with = "wire::timestamp::deserialize")]
    #[schemars(with = "DateTime<Utc>")]
    pub created_at: DateTime<Utc>,
}
