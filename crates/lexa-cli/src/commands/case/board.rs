use lexa_core::board::{CaseQuery, CaseSort};
use lexa_core::entities::Case;
use lexa_core::enums::CaseStatus;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CaseBoardArgs;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CaseBoardResponse {
    total: usize,
    cases: Vec<Case>,
}

pub async fn handle(args: &CaseBoardArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = CaseQuery {
        search: args.search.clone(),
        specialty: args.specialty.clone(),
        sort: args.sort.parse::<CaseSort>()?,
    };
    let open = ctx.client.cases_by_status(CaseStatus::Open).await?;
    let catalog = if query.specialty.is_some() {
        ctx.client.list_specialties().await?
    } else {
        Vec::new()
    };

    let mut cases = query.apply(open, &catalog);
    let total = cases.len();
    truncate(
        &mut cases,
        effective_limit(args.limit, flags.limit, ctx.config.general.default_limit),
    );

    output(&CaseBoardResponse { total, cases }, flags.format)
}
