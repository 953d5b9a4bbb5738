mod board;
mod create;
mod detail;
mod list;
mod transition;

use lexa_core::enums::CaseStatus;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CaseCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lexa case <subcommand>`.
pub async fn handle(action: &CaseCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        CaseCommands::Create(args) => create::handle(args, ctx, flags).await,
        CaseCommands::List(args) => list::handle(args, ctx, flags).await,
        CaseCommands::Get { id } => {
            let case = ctx.client.get_case(id).await?;
            output(&case, flags.format)
        }
        CaseCommands::Detail { id } => detail::handle_detail(id, ctx, flags).await,
        CaseCommands::Timeline { id } => detail::handle_timeline(id, ctx, flags).await,
        CaseCommands::Close { id } => transition::handle(id, CaseStatus::Closed, ctx, flags).await,
        CaseCommands::Cancel { id } => {
            transition::handle(id, CaseStatus::Canceled, ctx, flags).await
        }
        CaseCommands::Board(args) => board::handle(args, ctx, flags).await,
    }
}
