use anyhow::bail;
use lexa_core::entities::{
    Application, AuthenticatedUser, Case, ClientProfile, Comment, Document, Invitation,
    LawyerProfile, Message, Specialty, UserAccount,
};
use lexa_core::requests::{
    CreateCaseRequest, CreateClientRequest, CreateCommentRequest, CreateLawyerRequest,
    DocumentMetadataUpload, InviteLawyerRequest, SendMessageRequest, SignInRequest,
    SignUpRequest, SubmitApplicationRequest, UpdateClientProfileRequest,
    UpdateLawyerProfileRequest,
};
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;

/// Names accepted by `lexa schema`, in listing order.
pub const SCHEMA_NAMES: &[&str] = &[
    "case",
    "application",
    "invitation",
    "document",
    "comment",
    "message",
    "lawyer",
    "client",
    "specialty",
    "user",
    "session-user",
    "sign-up",
    "sign-in",
    "create-case",
    "submit-application",
    "invite-lawyer",
    "create-comment",
    "send-message",
    "upload-metadata",
    "create-lawyer",
    "update-lawyer",
    "create-client",
    "update-client",
];

/// JSON Schema for one wire type, or `None` for an unknown name.
pub fn schema_json(name: &str) -> anyhow::Result<Option<serde_json::Value>> {
    let schema = match name.trim().to_lowercase().replace('_', "-").as_str() {
        "case" => schema_for!(Case),
        "application" => schema_for!(Application),
        "invitation" => schema_for!(Invitation),
        "document" => schema_for!(Document),
        "comment" => schema_for!(Comment),
        "message" => schema_for!(Message),
        "lawyer" => schema_for!(LawyerProfile),
        "client" => schema_for!(ClientProfile),
        "specialty" => schema_for!(Specialty),
        "user" => schema_for!(UserAccount),
        "session-user" => schema_for!(AuthenticatedUser),
        "sign-up" => schema_for!(SignUpRequest),
        "sign-in" => schema_for!(SignInRequest),
        "create-case" => schema_for!(CreateCaseRequest),
        "submit-application" => schema_for!(SubmitApplicationRequest),
        "invite-lawyer" => schema_for!(InviteLawyerRequest),
        "create-comment" => schema_for!(CreateCommentRequest),
        "send-message" => schema_for!(SendMessageRequest),
        "upload-metadata" => schema_for!(DocumentMetadataUpload),
        "create-lawyer" => schema_for!(CreateLawyerRequest),
        "update-lawyer" => schema_for!(UpdateLawyerProfileRequest),
        "create-client" => schema_for!(CreateClientRequest),
        "update-client" => schema_for!(UpdateClientProfileRequest),
        _ => return Ok(None),
    };
    Ok(Some(serde_json::to_value(schema)?))
}

/// Handle `lexa schema`. Needs neither config nor a session.
pub fn handle(args: &SchemaArgs, _flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(schema) = schema_json(&args.type_name)? else {
        bail!(
            "unknown schema '{}'; expected one of: {}",
            args.type_name,
            SCHEMA_NAMES.join(", ")
        );
    };
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_name_resolves() {
        for name in SCHEMA_NAMES {
            assert!(schema_json(name).unwrap().is_some(), "{name}");
        }
    }

    #[test]
    fn underscores_and_case_are_normalized() {
        assert!(schema_json("Create_Case").unwrap().is_some());
    }

    #[test]
    fn case_schema_lists_wire_fields() {
        let schema = schema_json("case").unwrap().unwrap();
        let properties = schema["properties"].as_object().unwrap();
        assert!(properties.contains_key("clientId"));
        assert!(properties.contains_key("status"));
    }

    #[test]
    fn unknown_name_is_none() {
        assert!(schema_json("invoice").unwrap().is_none());
    }
}
