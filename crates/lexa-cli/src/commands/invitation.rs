use anyhow::bail;
use lexa_core::entities::Invitation;
use lexa_core::enums::Role;
use lexa_core::feed::invitation_message;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::InvitationCommands;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct InvitationListResponse {
    invitations: Vec<Invitation>,
}

/// Handle `lexa invitation <subcommand>`.
pub async fn handle(
    action: &InvitationCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        InvitationCommands::Send {
            case_id,
            lawyer_id,
            message,
        } => {
            let viewer = ctx.require_viewer()?;
            let case = ctx.client.get_case(case_id).await?;
            if !(viewer.is_client() && case.is_owned_by(&viewer.user_id)) {
                bail!("only the client who owns case {case_id} can invite lawyers to it");
            }
            let message = message
                .clone()
                .unwrap_or_else(|| invitation_message(&case.title));
            let invitation = ctx
                .client
                .invite_lawyer(&case.id, lawyer_id, &message)
                .await?;
            output(&invitation, flags.format)
        }
        InvitationCommands::List { case, limit } => {
            let mut invitations = if let Some(case_id) = case {
                ctx.client.invitations_by_case(case_id).await?
            } else {
                let viewer = ctx.require_viewer()?;
                if viewer.role != Role::Lawyer {
                    bail!("pass --case <id> to list the invitations sent for one of your cases");
                }
                ctx.client.invitations_by_lawyer(&viewer.user_id).await?
            };
            truncate(
                &mut invitations,
                effective_limit(*limit, flags.limit, ctx.config.general.default_limit),
            );
            output(&InvitationListResponse { invitations }, flags.format)
        }
        InvitationCommands::Accept { id } => {
            let invitation = ctx.client.accept_invitation(id).await?;
            output(&invitation, flags.format)
        }
        InvitationCommands::Reject { id } => {
            let invitation = ctx.client.reject_invitation(id).await?;
            output(&invitation, flags.format)
        }
    }
}
