use anyhow::bail;
use lexa_api::workflow::CaseDetail;
use lexa_core::entities::Application;
use lexa_core::enums::Role;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ApplicationCommands;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ApplicationListResponse {
    applications: Vec<Application>,
}

#[derive(Debug, Serialize)]
struct ApplicationReviewResponse {
    application_id: String,
    case_id: String,
    case_status: String,
    assigned_lawyer_id: Option<String>,
}

/// Handle `lexa application <subcommand>`.
pub async fn handle(
    action: &ApplicationCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ApplicationCommands::Submit { case_id, message } => {
            let mut detail = CaseDetail::load(&ctx.client, case_id).await?;
            let application = detail.submit_application(&ctx.client, message).await?;
            output(&application, flags.format)
        }
        ApplicationCommands::List { case, limit } => {
            let mut applications = list(case.as_deref(), ctx).await?;
            truncate(
                &mut applications,
                effective_limit(*limit, flags.limit, ctx.config.general.default_limit),
            );
            output(&ApplicationListResponse { applications }, flags.format)
        }
        ApplicationCommands::Accept { id, case } => review(id, case, true, ctx, flags).await,
        ApplicationCommands::Reject { id, case } => review(id, case, false, ctx, flags).await,
    }
}

async fn list(case: Option<&str>, ctx: &AppContext) -> anyhow::Result<Vec<Application>> {
    if let Some(case_id) = case {
        return Ok(ctx.client.applications_by_case(case_id).await?);
    }
    let viewer = ctx.require_viewer()?;
    match viewer.role {
        Role::Lawyer => Ok(ctx.client.applications_by_lawyer(&viewer.user_id).await?),
        Role::Admin => Ok(ctx.client.list_applications().await?),
        Role::Client => bail!("pass --case <id> to list the applications on one of your cases"),
    }
}

async fn review(
    id: &str,
    case_id: &str,
    accept: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut detail = CaseDetail::load(&ctx.client, case_id).await?;
    if accept {
        detail.accept_application(&ctx.client, id).await?;
    } else {
        detail.reject_application(&ctx.client, id).await?;
    }
    output(
        &ApplicationReviewResponse {
            application_id: id.to_string(),
            case_id: detail.case.id.clone(),
            case_status: detail.case.status.to_string(),
            assigned_lawyer_id: detail.case.assigned_lawyer_id.clone(),
        },
        flags.format,
    )
}
