use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SpecialtyCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SpecialtyRow {
    id: i64,
    code: String,
    name: String,
}

#[derive(Debug, Serialize)]
struct SpecialtyListResponse {
    specialties: Vec<SpecialtyRow>,
}

/// Handle `lexa specialty <subcommand>`.
pub async fn handle(
    action: &SpecialtyCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SpecialtyCommands::List => {
            let specialties = ctx
                .client
                .list_specialties()
                .await?
                .into_iter()
                .map(|s| SpecialtyRow {
                    id: s.id,
                    name: s.display_name().to_string(),
                    code: s.name,
                })
                .collect();
            output(&SpecialtyListResponse { specialties }, flags.format)
        }
    }
}
