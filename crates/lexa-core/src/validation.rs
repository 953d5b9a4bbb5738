//! Pre-network validation.
//!
//! Everything here runs before a request is built: a rejected upload or an
//! empty message never reaches the API.

use std::path::Path;

use crate::errors::CoreError;

/// Largest accepted upload, inclusive.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Content types the case document endpoints accept.
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "image/jpeg",
    "image/png",
];

/// What the validator needs to know about a file before uploading it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub filename: String,
    pub mime: String,
    pub size: u64,
}

impl FileCandidate {
    #[must_use]
    pub fn new(filename: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            filename: filename.into(),
            mime: mime.into(),
            size,
        }
    }
}

/// # Errors
///
/// Returns [`CoreError::Validation`] for a disallowed type or a file larger
/// than [`MAX_UPLOAD_BYTES`].
pub fn validate_upload(file: &FileCandidate) -> Result<(), CoreError> {
    if !ALLOWED_MIME_TYPES.contains(&file.mime.as_str()) {
        return Err(CoreError::validation(format!(
            "{}: unsupported file type '{}' (PDF, Word, JPEG or PNG only)",
            file.filename, file.mime
        )));
    }
    if file.size > MAX_UPLOAD_BYTES {
        return Err(CoreError::validation(format!(
            "{}: {} bytes exceeds the 10 MB limit",
            file.filename, file.size
        )));
    }
    Ok(())
}

/// Outcome of [`partition_uploads`].
#[derive(Debug)]
pub struct UploadSelection<T> {
    pub accepted: Vec<T>,
    pub rejected: Vec<(T, CoreError)>,
}

/// Keep the valid files and report the rest, so one bad attachment does not
/// block the others. `candidate` picks the description to validate out of
/// each item, which lets callers carry paths or bytes alongside it.
#[must_use]
pub fn partition_uploads<T>(
    files: Vec<T>,
    candidate: impl Fn(&T) -> &FileCandidate,
) -> UploadSelection<T> {
    let mut selection = UploadSelection {
        accepted: Vec::new(),
        rejected: Vec::new(),
    };
    for file in files {
        match validate_upload(candidate(&file)) {
            Ok(()) => selection.accepted.push(file),
            Err(err) => selection.rejected.push((file, err)),
        }
    }
    selection
}

/// Guess a content type from the extension. Unknown extensions map to
/// `application/octet-stream`, which [`validate_upload`] then rejects.
#[must_use]
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}

/// Trim and require a non-empty message. Returns the trimmed text.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] when nothing but whitespace is left.
pub fn validate_message<'a>(field: &str, message: &'a str) -> Result<&'a str, CoreError> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation(format!("{field} must not be empty")));
    }
    Ok(trimmed)
}

/// # Errors
///
/// Returns [`CoreError::Validation`] when the password is empty or the
/// confirmation differs.
pub fn validate_passwords(password: &str, confirmation: &str) -> Result<(), CoreError> {
    if password.is_empty() {
        return Err(CoreError::validation("password must not be empty"));
    }
    if password != confirmation {
        return Err(CoreError::validation("passwords do not match"));
    }
    Ok(())
}

/// Title, description, and specialty are all required to open a case.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] naming the first missing field.
pub fn validate_new_case(
    title: &str,
    description: &str,
    specialty_id: Option<i64>,
) -> Result<i64, CoreError> {
    validate_message("title", title)?;
    validate_message("description", description)?;
    specialty_id.ok_or_else(|| CoreError::validation("a legal specialty is required"))
}

/// # Errors
///
/// Returns [`CoreError::Validation`] listing every missing field.
pub fn validate_profile_fields(firstname: &str, lastname: &str, dni: &str) -> Result<(), CoreError> {
    let missing: Vec<&str> = [("firstname", firstname), ("lastname", lastname), ("dni", dni)]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::validation(format!(
            "required fields missing: {}",
            missing.join(", ")
        )))
    }
}
