use anyhow::Context;
use lexa_api::ApiError;
use lexa_api::documents::LocalFile;
use lexa_core::entities::Document;
use lexa_core::permissions::can_view_case;
use lexa_core::validation::validate_upload;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DocumentCommands;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct DocumentRow {
    id: String,
    filename: String,
    file_type: String,
    size: String,
    uploaded_by: String,
    uploaded_at: String,
}

impl From<Document> for DocumentRow {
    fn from(doc: Document) -> Self {
        Self {
            size: doc.size_label(),
            uploaded_at: doc.uploaded_at.format("%Y-%m-%d %H:%M").to_string(),
            id: doc.id,
            filename: doc.filename,
            file_type: doc.file_type,
            uploaded_by: doc.uploaded_by,
        }
    }
}

#[derive(Debug, Serialize)]
struct DocumentListResponse {
    documents: Vec<DocumentRow>,
}

#[derive(Debug, Serialize)]
struct FailedUpload {
    filename: String,
    reason: String,
}

#[derive(Debug, Serialize)]
struct DocumentUploadResponse {
    uploaded: Vec<DocumentRow>,
    failed: Vec<FailedUpload>,
}

/// Handle `lexa document <subcommand>`.
pub async fn handle(
    action: &DocumentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        DocumentCommands::List { case_id } => {
            let documents = ctx.client.documents_by_case(case_id).await?;
            output(
                &DocumentListResponse {
                    documents: documents.into_iter().map(DocumentRow::from).collect(),
                },
                flags.format,
            )
        }
        DocumentCommands::Upload { case_id, files } => {
            let viewer = ctx.require_viewer()?;
            let case = ctx.client.get_case(case_id).await?;
            can_view_case(&viewer, &case)?;

            let progress = Progress::bar(u64::try_from(files.len()).unwrap_or(u64::MAX), "uploading");
            let mut response = DocumentUploadResponse {
                uploaded: Vec::new(),
                failed: Vec::new(),
            };
            for path in files {
                let candidate = LocalFile::inspect(path)
                    .await
                    .with_context(|| format!("failed to inspect {}", path.display()))?;
                progress.set_message(&candidate.filename);
                if let Err(error) = validate_upload(&candidate) {
                    response.failed.push(FailedUpload {
                        filename: candidate.filename,
                        reason: error.to_string(),
                    });
                    progress.inc(1);
                    continue;
                }
                let file = LocalFile::read(path)
                    .await
                    .with_context(|| format!("failed to read {}", path.display()))?;
                match ctx.client.upload_document(&case, &viewer.user_id, &file).await {
                    Ok(doc) => response.uploaded.push(doc.into()),
                    Err(ApiError::Unauthorized) => {
                        progress.finish_err("session expired");
                        return Err(ApiError::Unauthorized.into());
                    }
                    Err(error) => response.failed.push(FailedUpload {
                        filename: file.candidate.filename,
                        reason: error.user_message(),
                    }),
                }
                progress.inc(1);
            }
            progress.finish_clear();
            output(&response, flags.format)
        }
    }
}
