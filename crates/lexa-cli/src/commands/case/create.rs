use std::path::{Path, PathBuf};

use anyhow::Context;
use lexa_api::documents::LocalFile;
use lexa_api::workflow::{NewCase, create_case_with_documents};
use lexa_core::entities::{Case, Document};
use lexa_core::validation::{partition_uploads, validate_new_case};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CaseCreateArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct RejectedFile {
    filename: String,
    reason: String,
}

#[derive(Serialize)]
struct CaseCreateResponse {
    case: Case,
    uploaded: Vec<Document>,
    failed: Vec<RejectedFile>,
}

pub async fn handle(args: &CaseCreateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    validate_new_case(&args.title, &args.description, args.specialty)?;

    let (files, mut failed) = read_attachments(&args.file).await?;

    let progress = Progress::spinner("creating case");
    let created = create_case_with_documents(
        &ctx.client,
        NewCase {
            title: args.title.clone(),
            description: args.description.clone(),
            specialty_id: args.specialty,
            files,
        },
    )
    .await;
    progress.finish_clear();
    let created = created?;

    failed.extend(created.failed.into_iter().map(|(file, error)| {
        tracing::warn!(file = %file.filename, %error, "document not attached");
        RejectedFile {
            filename: file.filename,
            reason: error.user_message(),
        }
    }));

    output(
        &CaseCreateResponse {
            case: created.case,
            uploaded: created.uploaded,
            failed,
        },
        flags.format,
    )
}

/// Read the files that pass validation; the rest are reported, not sent.
async fn read_attachments(paths: &[PathBuf]) -> anyhow::Result<(Vec<LocalFile>, Vec<RejectedFile>)> {
    let mut inspected = Vec::with_capacity(paths.len());
    for path in paths {
        let candidate = LocalFile::inspect(path)
            .await
            .with_context(|| format!("failed to inspect {}", path.display()))?;
        inspected.push((path.as_path(), candidate));
    }

    let selection = partition_uploads(inspected, |(_, candidate)| candidate);
    let rejected = selection
        .rejected
        .into_iter()
        .map(|((_, candidate), error)| RejectedFile {
            filename: candidate.filename,
            reason: error.to_string(),
        })
        .collect();

    let mut files = Vec::with_capacity(selection.accepted.len());
    for (path, _) in selection.accepted {
        files.push(read_one(path).await?);
    }
    Ok((files, rejected))
}

async fn read_one(path: &Path) -> anyhow::Result<LocalFile> {
    LocalFile::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn invalid_attachments_are_reported_and_the_rest_read() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = dir.path().join("demanda.pdf");
        let txt = dir.path().join("notas.txt");
        let png = dir.path().join("foto.png");
        std::fs::write(&pdf, b"%PDF-1.4").unwrap();
        std::fs::write(&txt, b"apuntes").unwrap();
        std::fs::write(&png, b"\x89PNG").unwrap();

        let (files, rejected) = read_attachments(&[pdf, txt, png]).await.unwrap();

        let read: Vec<&str> = files.iter().map(|f| f.candidate.filename.as_str()).collect();
        assert_eq!(read, vec!["demanda.pdf", "foto.png"]);
        assert_eq!(files[0].bytes, b"%PDF-1.4");
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].filename, "notas.txt");
    }

    #[tokio::test]
    async fn missing_attachment_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_attachments(&[dir.path().join("nope.pdf")]).await.unwrap_err();
        assert!(err.to_string().contains("failed to inspect"));
    }
}
