//! Request payloads for every write endpoint.
//!
//! These mirror the JSON bodies the marketplace API accepts. Constructors
//! exist where a payload is always built from the same inputs; otherwise the
//! structs are filled in directly.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{ContactInfo, FullName};
use crate::enums::{CommentType, Role};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SignUpRequest {
    pub username: String,
    pub password: String,
    pub roles: Vec<Role>,
}

impl SignUpRequest {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            roles: vec![role],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCaseRequest {
    pub title: String,
    pub description: String,
    pub client_id: String,
    pub specialty_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmitApplicationRequest {
    pub case_id: String,
    pub lawyer_id: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InviteLawyerRequest {
    pub case_id: String,
    pub lawyer_id: String,
    pub message: String,
}

/// Comment body. The type is not serialized: it selects the endpoint
/// (`/comments/general` or `/comments/final`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub case_id: String,
    pub author_id: String,
    pub content: String,
    #[serde(skip)]
    pub comment_type: CommentType,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SendMessageRequest {
    pub content: String,
}

/// JSON fallback body for document uploads: the file travels inline as a
/// base64 `data:` URL.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadataUpload {
    pub filename: String,
    pub file_url: String,
    pub file_size: u64,
    pub file_type: String,
}

impl DocumentMetadataUpload {
    /// Build the payload from an already base64-encoded body.
    #[must_use]
    pub fn from_encoded(filename: &str, mime: &str, size: u64, base64_body: &str) -> Self {
        Self {
            filename: filename.to_string(),
            file_url: format!("data:{mime};base64,{base64_body}"),
            file_size: size,
            file_type: mime.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateLawyerRequest {
    pub user_id: String,
    pub firstname: String,
    pub lastname: String,
    pub dni: String,
    pub contact_info: ContactInfo,
    pub description: String,
    pub specialties: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLawyerProfileRequest {
    pub firstname: String,
    pub lastname: String,
    pub dni: String,
    pub contact_info: ContactInfo,
    pub description: String,
    pub specialties: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UpdateSpecialtiesRequest {
    pub specialties: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientRequest {
    pub user_id: String,
    pub firstname: String,
    pub lastname: String,
    pub dni: String,
    pub contact_info: ContactInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientProfileRequest {
    pub firstname: String,
    pub lastname: String,
    pub dni: String,
    pub contact_info: ContactInfo,
}

/// Fields shared by every profile form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFields {
    pub name: FullName,
    pub dni: String,
    pub contact_info: ContactInfo,
}

impl ProfileFields {
    #[must_use]
    pub fn into_client_update(self) -> UpdateClientProfileRequest {
        UpdateClientProfileRequest {
            firstname: self.name.firstname,
            lastname: self.name.lastname,
            dni: self.dni,
            contact_info: self.contact_info,
        }
    }

    #[must_use]
    pub fn into_lawyer_update(
        self,
        description: String,
        specialties: Vec<String>,
    ) -> UpdateLawyerProfileRequest {
        UpdateLawyerProfileRequest {
            firstname: self.name.firstname,
            lastname: self.name.lastname,
            dni: self.dni,
            contact_info: self.contact_info,
            description,
            specialties,
        }
    }
}
