use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::CaseStatus;
use crate::errors::CoreError;
use crate::wire;

/// A legal matter posted by a client.
///
/// Exactly one client owns a case. `assigned_lawyer_id` is only populated
/// once an application has been accepted server-side.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    #[serde(deserialize_with = "wire::id::deserialize")]
    #[schemars(with = "String")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "wire::id::deserialize")]
    #[schemars(with = "String")]
    pub client_id: String,
    #[serde(
        default,
        deserialize_with = "wire::id_option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub assigned_lawyer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty_id: Option<i64>,
    pub status: CaseStatus,
    #[serde(deserialize_with = "wire::timestamp::deserialize")]
    #[schemars(with = "DateTime<Utc>")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "wire::timestamp::deserialize")]
    #[schemars(with = "DateTime<Utc>")]
    pub updated_at: DateTime<Utc>,
}

impl Case {
    #[must_use]
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.client_id == user_id
    }

    #[must_use]
    pub fn is_assigned_to(&self, user_id: &str) -> bool {
        self.assigned_lawyer_id.as_deref() == Some(user_id)
    }

    #[must_use]
    pub fn has_assigned_lawyer(&self) -> bool {
        self.assigned_lawyer_id
            .as_deref()
            .is_some_and(|id| !id.is_empty())
    }

    /// Check locally whether the case may move to `next`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] when the lifecycle forbids it.
    pub fn transition(&self, next: CaseStatus) -> Result<(), CoreError> {
        if self.status.can_transition_to(next) {
            Ok(())
        } else {
            Err(CoreError::InvalidTransition {
                entity_type: "case".into(),
                id: self.id.clone(),
                from: self.status.to_string(),
                to: next.to_string(),
            })
        }
    }
}
