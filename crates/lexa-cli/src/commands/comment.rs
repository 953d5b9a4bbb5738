use anyhow::bail;
use lexa_core::entities::Comment;
use lexa_core::enums::CommentType;
use lexa_core::permissions::{CasePermissions, can_view_case};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CommentCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CommentListResponse {
    comments: Vec<Comment>,
}

/// Handle `lexa comment <subcommand>`.
pub async fn handle(action: &CommentCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        CommentCommands::Add {
            case_id,
            content,
            is_final,
        } => {
            let viewer = ctx.require_viewer()?;
            let case = ctx.client.get_case(case_id).await?;
            can_view_case(&viewer, &case)?;
            if !CasePermissions::for_viewer(&viewer, &case).can_comment {
                bail!("case {case_id} is {} or you are not a party to it", case.status);
            }
            let comment_type = if *is_final {
                CommentType::Final
            } else {
                CommentType::General
            };
            let comment = ctx
                .client
                .add_comment(case_id, &viewer.user_id, content, comment_type)
                .await?;
            output(&comment, flags.format)
        }
        CommentCommands::List { case_id } => {
            let comments = ctx.client.comments_by_case(case_id).await?;
            output(&CommentListResponse { comments }, flags.format)
        }
    }
}
