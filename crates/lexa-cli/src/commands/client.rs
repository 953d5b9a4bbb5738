use lexa_core::entities::ClientProfile;
use lexa_core::requests::CreateClientRequest;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ClientCommands;
use crate::commands::lawyer::profile_fields;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ClientListResponse {
    clients: Vec<ClientProfile>,
}

/// Handle `lexa client <subcommand>`.
pub async fn handle(action: &ClientCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ClientCommands::List { limit } => {
            let mut clients = ctx.client.list_clients().await?;
            truncate(
                &mut clients,
                effective_limit(*limit, flags.limit, ctx.config.general.default_limit),
            );
            output(&ClientListResponse { clients }, flags.format)
        }
        ClientCommands::Get { user_id } => {
            let user_id = match user_id {
                Some(id) => id.clone(),
                None => ctx.require_user()?.id,
            };
            let client = ctx.client.client_by_user(&user_id).await?;
            output(&client, flags.format)
        }
        ClientCommands::Create(args) => {
            let user = ctx.require_user()?;
            let fields = profile_fields(args);
            let request = CreateClientRequest {
                user_id: user.id,
                firstname: fields.name.firstname,
                lastname: fields.name.lastname,
                dni: fields.dni,
                contact_info: fields.contact_info,
            };
            let client = ctx.client.create_client(&request).await?;
            output(&client, flags.format)
        }
        ClientCommands::Update(args) => {
            let user = ctx.require_user()?;
            let update = profile_fields(args).into_client_update();
            let client = ctx.client.update_client(&user.id, &update).await?;
            output(&client, flags.format)
        }
    }
}
