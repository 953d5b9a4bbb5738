//! Upload fallback chain against a fake backend.

mod support;

use lexa_api::ApiError;
use lexa_api::documents::{CASE_LOCKED_MESSAGE, LocalFile, UPLOAD_FAILED_MESSAGE};
use lexa_core::entities::Case;
use pretty_assertions::assert_eq;
use support::{FakeBackend, case_json, document_json, signed_in};

const UPLOAD: &str = "/api/v1/cases/c1/documents/upload";
const INLINE: &str = "/api/v1/cases/c1/documents";

fn case(status: &str) -> Case {
    serde_json::from_value(case_json("c1", "u-client", status, None)).unwrap()
}

fn pdf() -> LocalFile {
    LocalFile::from_bytes("contrato.pdf", "application/pdf", b"%PDF".to_vec())
}

#[tokio::test]
async fn multipart_upload_is_used_when_available() {
    let backend = FakeBackend::start();
    backend.on(
        "POST",
        UPLOAD,
        201,
        document_json("d1", "c1", "contrato.pdf", "u-client").to_string(),
    );
    let client = backend.client(signed_in("u-client", "ROLE_CLIENT"));

    let doc = client
        .upload_document(&case("OPEN"), "u-client", &pdf())
        .await
        .unwrap();

    assert_eq!(doc.id, "d1");
    let sent = backend.requests_to("POST", UPLOAD);
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].query.as_deref(), Some("uploadedBy=u-client"));
    assert!(
        sent[0]
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("multipart/form-data"))
    );
    assert!(sent[0].body.contains("contrato.pdf"));
    assert!(backend.requests_to("POST", INLINE).is_empty());
}

#[tokio::test]
async fn missing_multipart_endpoint_falls_back_to_inline_base64() {
    let backend = FakeBackend::start();
    backend.on(
        "POST",
        INLINE,
        201,
        document_json("d2", "c1", "contrato.pdf", "u-client").to_string(),
    );
    let client = backend.client(signed_in("u-client", "ROLE_CLIENT"));

    let doc = client
        .upload_document(&case("EVALUATION"), "u-client", &pdf())
        .await
        .unwrap();

    assert_eq!(doc.id, "d2");
    assert_eq!(backend.requests_to("POST", UPLOAD).len(), 1);
    let inline = backend.requests_to("POST", INLINE);
    assert_eq!(inline.len(), 1);
    let body = inline[0].json();
    assert_eq!(body["filename"], "contrato.pdf");
    assert_eq!(body["fileUrl"], "data:application/pdf;base64,JVBERg==");
    assert_eq!(body["fileSize"], 4);
    assert_eq!(body["fileType"], "application/pdf");
    assert_eq!(inline[0].query.as_deref(), Some("uploadedBy=u-client"));
}

#[tokio::test]
async fn forbidden_upload_reports_the_server_reason() {
    let backend = FakeBackend::start();
    backend.on_with_header(
        "POST",
        UPLOAD,
        403,
        "",
        ("x-error-message", "Caso cerrado por el cliente"),
    );
    let client = backend.client(signed_in("u-client", "ROLE_CLIENT"));

    let err = client
        .upload_document(&case("ACCEPTED"), "u-client", &pdf())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::CaseLocked { ref message } if message == "Caso cerrado por el cliente"));
}

#[tokio::test]
async fn silent_forbidden_on_inline_path_uses_default_message() {
    let backend = FakeBackend::start();
    backend.on("POST", INLINE, 403, "");
    let client = backend.client(signed_in("u-client", "ROLE_CLIENT"));

    let err = client
        .upload_document(&case("OPEN"), "u-client", &pdf())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::CaseLocked { ref message } if message == CASE_LOCKED_MESSAGE));
}

#[tokio::test]
async fn inline_server_error_means_upload_failed() {
    let backend = FakeBackend::start();
    backend.on("POST", INLINE, 500, r#"{"message":"Internal Server Error"}"#);
    let client = backend.client(signed_in("u-client", "ROLE_CLIENT"));

    let err = client
        .upload_document(&case("OPEN"), "u-client", &pdf())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::UploadFailed { ref message } if message == UPLOAD_FAILED_MESSAGE));
}

#[tokio::test]
async fn rejected_files_never_reach_the_server() {
    let backend = FakeBackend::start();
    let client = backend.client(signed_in("u-client", "ROLE_CLIENT"));

    let script = LocalFile::from_bytes("run.exe", "application/x-msdownload", vec![0; 8]);
    let err = client
        .upload_document(&case("OPEN"), "u-client", &script)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));

    let huge = LocalFile::from_bytes("scan.pdf", "application/pdf", vec![0; 10 * 1024 * 1024 + 1]);
    let err = client
        .upload_document(&case("OPEN"), "u-client", &huge)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));

    let err = client
        .upload_document(&case("CLOSED"), "u-client", &pdf())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));

    assert!(backend.requests().is_empty());
}
