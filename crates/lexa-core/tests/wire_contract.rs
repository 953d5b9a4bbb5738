//! Wire contract tests: backend-shaped fixtures parse, entities roundtrip,
//! and serialized values validate against their generated JSON Schemas.

use chrono::{TimeZone, Utc};
use lexa_core::entities::*;
use lexa_core::enums::*;
use lexa_core::requests::*;
use schemars::schema_for;

fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn noon() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap()
}

roundtrip_and_validate!(
    case_roundtrip,
    Case,
    Case {
        id: "7f1c9a2e-0b5d-4c1e-9a51-3f0c2d6e8b10".into(),
        title: "Divorcio".into(),
        description: "Separación de bienes".into(),
        client_id: "u-client".into(),
        assigned_lawyer_id: Some("u-lawyer".into()),
        specialty_id: Some(4),
        status: CaseStatus::Accepted,
        created_at: noon(),
        updated_at: noon(),
    }
);

roundtrip_and_validate!(
    application_roundtrip,
    Application,
    Application {
        id: "12".into(),
        case_id: "c1".into(),
        lawyer_id: "u-lawyer".into(),
        message: "Tengo experiencia en familia".into(),
        status: ApplicationStatus::Submitted,
        created_at: None,
    }
);

roundtrip_and_validate!(
    invitation_roundtrip,
    Invitation,
    Invitation {
        id: "inv-1".into(),
        case_id: "c1".into(),
        lawyer_id: "u-lawyer".into(),
        message: "Nos gustaría que revises el caso \"Divorcio\".".into(),
        status: InvitationStatus::Pending,
        created_at: noon(),
    }
);

roundtrip_and_validate!(
    document_roundtrip,
    Document,
    Document {
        id: "3".into(),
        case_id: "c1".into(),
        filename: "acta.pdf".into(),
        file_url: Some("https://files.example/acta.pdf".into()),
        file_size: 52_311,
        file_type: "application/pdf".into(),
        uploaded_by: "u-client".into(),
        uploaded_at: noon(),
    }
);

roundtrip_and_validate!(
    comment_roundtrip,
    Comment,
    Comment {
        id: "5".into(),
        case_id: "c1".into(),
        author_id: "u-lawyer".into(),
        content: "Audiencia fijada".into(),
        comment_type: CommentType::Final,
        created_at: noon(),
    }
);

roundtrip_and_validate!(
    lawyer_roundtrip,
    LawyerProfile,
    LawyerProfile {
        id: "1".into(),
        user_id: "u-lawyer".into(),
        full_name: FullName {
            firstname: "Luis".into(),
            lastname: "Rojas".into(),
        },
        dni: "44556677".into(),
        contact_info: ContactInfo {
            phone_number: "+51 999 000 111".into(),
            address: "Av. Arequipa 100".into(),
        },
        description: "Litigante".into(),
        specialties: vec!["FAMILY_LAW".into()],
    }
);

roundtrip_and_validate!(
    create_case_request_roundtrip,
    CreateCaseRequest,
    CreateCaseRequest {
        title: "Divorcio".into(),
        description: "Separación".into(),
        client_id: "u-client".into(),
        specialty_id: 4,
    }
);

#[test]
fn backend_case_with_local_datetimes_parses() {
    let raw = r#"{
        "id": "c1",
        "title": "Despido arbitrario",
        "description": "Reclamo de beneficios",
        "clientId": "u-client",
        "assignedLawyerId": null,
        "specialtyId": 3,
        "status": "OPEN",
        "createdAt": "2025-06-02T09:30:00.123456",
        "updatedAt": "2025-06-02T09:30:00.123456"
    }"#;
    let case: Case = serde_json::from_str(raw).unwrap();
    assert_eq!(case.status, CaseStatus::Open);
    assert!(case.assigned_lawyer_id.is_none());
    assert!(!case.has_assigned_lawyer());
    assert_eq!(case.specialty_id, Some(3));
}

#[test]
fn backend_application_with_numeric_id_parses() {
    let raw = r#"[{"id": 42, "caseId": 41, "lawyerId": "u-l", "message": "Hola", "status": "SUBMITTED"}]"#;
    let apps: Vec<Application> = serde_json::from_str(raw).unwrap();
    assert_eq!(apps[0].id, "42");
    assert_eq!(apps[0].case_id, "41");
    assert!(apps[0].status.is_pending());
}

#[test]
fn sub_resources_of_a_numeric_case_parse() {
    let docs: Vec<Document> = serde_json::from_str(
        r#"[{"id": 5, "caseId": 41, "filename": "acta.pdf", "fileSize": 4,
             "fileType": "application/pdf", "uploadedBy": 7,
             "uploadedAt": "2025-03-03T09:00:00"}]"#,
    )
    .unwrap();
    assert_eq!(docs[0].case_id, "41");
    assert_eq!(docs[0].uploaded_by, "7");

    let comments: Vec<Comment> = serde_json::from_str(
        r#"[{"id": 1, "caseId": 41, "authorId": 7, "content": "Listo",
             "type": "GENERAL", "createdAt": "2025-03-03T09:00:00"}]"#,
    )
    .unwrap();
    assert_eq!(comments[0].case_id, "41");
    assert_eq!(comments[0].author_id, "7");

    let messages: Vec<Message> = serde_json::from_str(
        r#"[{"id": 2, "caseId": 41, "senderId": 8, "content": "Hola",
             "createdAt": "2025-03-03T09:00:00"}]"#,
    )
    .unwrap();
    assert_eq!(messages[0].sender_id, "8");

    let invitation: Invitation = serde_json::from_str(
        r#"{"id": 3, "caseId": 41, "lawyerId": 9, "message": "hola",
            "status": "PENDING", "createdAt": "2025-03-03T09:00:00"}"#,
    )
    .unwrap();
    assert_eq!(invitation.lawyer_id, "9");

    let case: Case = serde_json::from_str(
        r#"{"id": 41, "title": "Divorcio", "clientId": 7, "assignedLawyerId": 9,
            "status": "ACCEPTED", "createdAt": "2025-03-01T10:00:00",
            "updatedAt": "2025-03-02T10:00:00"}"#,
    )
    .unwrap();
    assert!(case.is_owned_by("7"));
    assert!(case.is_assigned_to("9"));
}

#[test]
fn authenticated_user_resolves_primary_role() {
    let raw = r#"{"id": "u1", "username": "ana", "roles": ["ROLE_LAWYER"], "token": "eyJ..."}"#;
    let user: AuthenticatedUser = serde_json::from_str(raw).unwrap();
    assert_eq!(user.role(), Role::Lawyer);
    assert!(!format!("{user:?}").contains("eyJ"));
}

#[test]
fn contact_info_accepts_short_phone_key() {
    let info: ContactInfo =
        serde_json::from_str(r#"{"phone": "123", "address": "Lima"}"#).unwrap();
    assert_eq!(info.phone_number, "123");
}

#[test]
fn profile_enum_exposes_display_name() {
    let client = Profile::Client(ClientProfile {
        id: "9".into(),
        user_id: "u-client".into(),
        full_name: FullName {
            firstname: "Ana".into(),
            lastname: "Paz".into(),
        },
        dni: "1".into(),
        contact_info: ContactInfo::default(),
    });
    assert_eq!(client.display_name(), "Ana Paz");
    assert_eq!(client.user_id(), "u-client");
}
