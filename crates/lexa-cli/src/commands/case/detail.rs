use std::collections::HashMap;

use lexa_api::workflow::CaseDetail;
use lexa_core::entities::{Application, Case, Comment, Document, Message};
use lexa_core::permissions::CasePermissions;
use lexa_core::timeline::TimelineEvent;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Serialize)]
struct CaseDetailResponse {
    case: Case,
    status_label: &'static str,
    permissions: CasePermissions,
    applications: Vec<Application>,
    documents: Vec<Document>,
    comments: Vec<Comment>,
    messages: Vec<Message>,
    names: HashMap<String, String>,
}

#[derive(Serialize)]
struct TimelineResponse {
    events: Vec<TimelineEvent>,
}

async fn load(id: &str, ctx: &AppContext) -> anyhow::Result<CaseDetail> {
    let progress = Progress::spinner("loading case");
    let detail = CaseDetail::load(&ctx.client, id).await;
    progress.finish_clear();
    Ok(detail?)
}

pub async fn handle_detail(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let detail = load(id, ctx).await?;
    output(
        &CaseDetailResponse {
            status_label: detail.case.status.label(),
            case: detail.case,
            permissions: detail.permissions,
            applications: detail.applications,
            documents: detail.documents,
            comments: detail.comments,
            messages: detail.messages,
            names: detail.names,
        },
        flags.format,
    )
}

pub async fn handle_timeline(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let detail = load(id, ctx).await?;
    output(
        &TimelineResponse {
            events: detail.timeline(),
        },
        flags.format,
    )
}
