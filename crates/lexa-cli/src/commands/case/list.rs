use lexa_core::board::{CaseParty, cases_for_profile};
use lexa_core::entities::Case;
use lexa_core::enums::{CaseStatus, Role};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CaseListArgs;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CaseListResponse {
    cases: Vec<Case>,
}

pub async fn handle(args: &CaseListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut cases = if let Some(status) = &args.status {
        let status: CaseStatus = parse_enum(status, "status")?;
        ctx.client.cases_by_status(status).await?
    } else if args.all {
        ctx.client.list_cases().await?
    } else {
        let viewer = ctx.require_viewer()?;
        match viewer.role {
            Role::Lawyer => cases_for_profile(
                ctx.client.cases_by_lawyer(&viewer.user_id).await?,
                &viewer.user_id,
                CaseParty::Lawyer,
            ),
            Role::Client => cases_for_profile(
                ctx.client.cases_by_client(&viewer.user_id).await?,
                &viewer.user_id,
                CaseParty::Client,
            ),
            Role::Admin => ctx.client.list_cases().await?,
        }
    };

    let fallback = if args.recent {
        u32::try_from(ctx.config.general.recent_cases).unwrap_or(u32::MAX)
    } else {
        ctx.config.general.default_limit
    };
    truncate(&mut cases, effective_limit(args.limit, flags.limit, fallback));

    output(&CaseListResponse { cases }, flags.format)
}
