use anyhow::bail;
use lexa_core::enums::CaseStatus;
use lexa_core::permissions::{can_close_or_cancel, can_view_case};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Close or cancel a case after checking the guard locally.
pub async fn handle(
    id: &str,
    target: CaseStatus,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let viewer = ctx.require_viewer()?;
    let case = ctx.client.get_case(id).await?;
    can_view_case(&viewer, &case)?;
    if !can_close_or_cancel(&viewer, &case, target) {
        case.transition(target)?;
        bail!("only the client who owns case {id} can move it to {target}");
    }

    let updated = match target {
        CaseStatus::Closed => ctx.client.close_case(id, &viewer.user_id).await?,
        _ => ctx.client.cancel_case(id, &viewer.user_id).await?,
    };
    tracing::info!(case = %updated.id, status = %updated.status, "case updated");
    output(&updated, flags.format)
}
