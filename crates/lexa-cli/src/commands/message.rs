use lexa_core::entities::Message;
use lexa_core::permissions::can_view_case;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MessageCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct MessageListResponse {
    messages: Vec<Message>,
}

/// Handle `lexa message <subcommand>`.
pub async fn handle(action: &MessageCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        MessageCommands::Send { case_id, content } => {
            let viewer = ctx.require_viewer()?;
            let case = ctx.client.get_case(case_id).await?;
            can_view_case(&viewer, &case)?;
            let message = ctx
                .client
                .send_message(case_id, &viewer.user_id, content)
                .await?;
            output(&message, flags.format)
        }
        MessageCommands::List { case_id } => {
            let mut messages = ctx.client.messages_by_case(case_id).await?;
            messages.sort_by_key(|m| m.created_at);
            output(&MessageListResponse { messages }, flags.format)
        }
    }
}
