//! Case documents and the upload fallback chain.
//!
//! Uploads try the multipart endpoint first. A 404 there means the backend
//! predates it, so the file is re-sent inline as a base64 `data:` URL. A 403
//! at either step means the case is locked; a 500 from the inline path
//! usually means the payload was too large.

use std::path::Path;

use base64::Engine as _;
use lexa_core::entities::{Case, Document};
use lexa_core::errors::CoreError;
use lexa_core::permissions::can_upload;
use lexa_core::requests::DocumentMetadataUpload;
use lexa_core::validation::{FileCandidate, mime_for_path, validate_upload};
use reqwest::multipart::{Form, Part};

use crate::error::GENERIC_MESSAGE;
use crate::http::{segment, with_query};
use crate::{ApiClient, ApiError};

/// Shown when the server refuses an upload without saying why.
pub const CASE_LOCKED_MESSAGE: &str = "this case does not accept further changes";

/// Shown when the inline fallback fails server-side.
pub const UPLOAD_FAILED_MESSAGE: &str = "file too large or server error; try a smaller file";

/// A file read into memory, ready to upload.
#[derive(Debug, Clone)]
pub struct LocalFile {
    pub candidate: FileCandidate,
    pub bytes: Vec<u8>,
}

impl LocalFile {
    #[must_use]
    pub fn from_bytes(filename: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            candidate: FileCandidate::new(filename, mime, bytes.len() as u64),
            bytes,
        }
    }

    /// Describe a file on disk without reading it, for early validation.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Io`] if the file's metadata cannot be read.
    pub async fn inspect(path: &Path) -> Result<FileCandidate, ApiError> {
        let meta = tokio::fs::metadata(path).await?;
        Ok(FileCandidate::new(
            file_name(path),
            mime_for_path(path),
            meta.len(),
        ))
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Io`] if the file cannot be read.
    pub async fn read(path: &Path) -> Result<Self, ApiError> {
        let bytes = tokio::fs::read(path).await?;
        Ok(Self::from_bytes(file_name(path), mime_for_path(path), bytes))
    }

    fn data_url_payload(&self) -> DocumentMetadataUpload {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        DocumentMetadataUpload::from_encoded(
            &self.candidate.filename,
            &self.candidate.mime,
            self.candidate.size,
            &encoded,
        )
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

fn locked(message: String) -> ApiError {
    let message = if message == GENERIC_MESSAGE {
        CASE_LOCKED_MESSAGE.to_string()
    } else {
        message
    };
    ApiError::CaseLocked { message }
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn documents_by_case(&self, case_id: &str) -> Result<Vec<Document>, ApiError> {
        self.get_json(&format!("/api/v1/cases/{}/documents", segment(case_id)))
            .await
    }

    /// Attach `file` to `case` on behalf of `uploaded_by`.
    ///
    /// The case status and the file are checked before any request.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Validation`] for a terminal case, a disallowed type, or
    ///   a file over 10 MB
    /// - [`ApiError::CaseLocked`] on a 403 from either endpoint
    /// - [`ApiError::UploadFailed`] on a 500 from the inline fallback
    pub async fn upload_document(
        &self,
        case: &Case,
        uploaded_by: &str,
        file: &LocalFile,
    ) -> Result<Document, ApiError> {
        if !can_upload(case) {
            return Err(CoreError::Forbidden(format!(
                "case is {}; documents can no longer be added",
                case.status
            ))
            .into());
        }
        validate_upload(&file.candidate)?;

        match self.upload_multipart(&case.id, uploaded_by, file).await {
            Ok(doc) => Ok(doc),
            Err(ApiError::NotFound { .. }) => {
                tracing::warn!(
                    case = %case.id,
                    file = %file.candidate.filename,
                    "multipart upload endpoint missing; retrying inline"
                );
                self.upload_inline(&case.id, uploaded_by, file).await
            }
            Err(ApiError::Forbidden { message }) => Err(locked(message)),
            Err(other) => Err(other),
        }
    }

    async fn upload_multipart(
        &self,
        case_id: &str,
        uploaded_by: &str,
        file: &LocalFile,
    ) -> Result<Document, ApiError> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.candidate.filename.clone())
            .mime_str(&file.candidate.mime)?;
        let path = with_query(
            &format!("/api/v1/cases/{}/documents/upload", segment(case_id)),
            &[("uploadedBy", uploaded_by)],
        );
        self.post_multipart(&path, Form::new().part("file", part))
            .await
    }

    async fn upload_inline(
        &self,
        case_id: &str,
        uploaded_by: &str,
        file: &LocalFile,
    ) -> Result<Document, ApiError> {
        let path = with_query(
            &format!("/api/v1/cases/{}/documents", segment(case_id)),
            &[("uploadedBy", uploaded_by)],
        );
        match self.post_json(&path, &file.data_url_payload()).await {
            Err(ApiError::Forbidden { message }) => Err(locked(message)),
            Err(ApiError::ServerError { status: 500, .. }) => Err(ApiError::UploadFailed {
                message: UPLOAD_FAILED_MESSAGE.into(),
            }),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_payload_encodes_bytes() {
        let file = LocalFile::from_bytes("a.pdf", "application/pdf", b"%PDF".to_vec());
        let payload = file.data_url_payload();
        assert_eq!(payload.file_url, "data:application/pdf;base64,JVBERg==");
        assert_eq!(payload.file_size, 4);
    }

    #[test]
    fn locked_uses_default_when_server_is_silent() {
        assert!(matches!(
            locked(GENERIC_MESSAGE.into()),
            ApiError::CaseLocked { message } if message == CASE_LOCKED_MESSAGE
        ));
        assert!(matches!(
            locked("Caso cerrado".into()),
            ApiError::CaseLocked { message } if message == "Caso cerrado"
        ));
    }
}
