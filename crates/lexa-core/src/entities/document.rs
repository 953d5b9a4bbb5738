use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::wire;

/// A file attached to a case. Append-only: there is no deletion path.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(deserialize_with = "wire::id::deserialize")]
    #[schemars(with = "String")]
    pub id: String,
    #[serde(default, deserialize_with = "wire::id::deserialize")]
    #[schemars(with = "String")]
    pub case_id: String,
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_size: u64,
    #[serde(default)]
    pub file_type: String,
    #[serde(deserialize_with = "wire::id::deserialize")]
    #[schemars(with = "String")]
    pub uploaded_by: String,
    #[serde(deserialize_with = "wire::timestamp::deserialize")]
    #[schemars(with = "DateTime<Utc>")]
    pub uploaded_at: DateTime<Utc>,
}

impl Document {
    /// Size in megabytes with two decimals, as listed next to the file name.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.file_size as f64 / 1024.0 / 1024.0)
    }
}
