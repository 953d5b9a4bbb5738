use lexa_core::entities::{ContactInfo, FullName, LawyerProfile};
use lexa_core::requests::{CreateLawyerRequest, ProfileFields};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{LawyerCommands, LawyerProfileArgs, ProfileArgs};
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct LawyerListResponse {
    lawyers: Vec<LawyerProfile>,
}

/// Handle `lexa lawyer <subcommand>`.
pub async fn handle(action: &LawyerCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        LawyerCommands::List { specialty, limit } => {
            let mut lawyers = ctx.client.list_lawyers().await?;
            if let Some(code) = specialty {
                lawyers.retain(|l| l.specialties.iter().any(|s| s.eq_ignore_ascii_case(code)));
            }
            truncate(
                &mut lawyers,
                effective_limit(*limit, flags.limit, ctx.config.general.default_limit),
            );
            output(&LawyerListResponse { lawyers }, flags.format)
        }
        LawyerCommands::Get { user_id } => {
            let user_id = match user_id {
                Some(id) => id.clone(),
                None => ctx.require_user()?.id,
            };
            let lawyer = ctx.client.lawyer_by_user(&user_id).await?;
            output(&lawyer, flags.format)
        }
        LawyerCommands::Create(args) => {
            let user = ctx.require_user()?;
            let fields = profile_fields(&args.profile);
            let request = CreateLawyerRequest {
                user_id: user.id,
                firstname: fields.name.firstname,
                lastname: fields.name.lastname,
                dni: fields.dni,
                contact_info: fields.contact_info,
                description: args.description.clone(),
                specialties: args.specialties.clone(),
            };
            let lawyer = ctx.client.create_lawyer(&request).await?;
            output(&lawyer, flags.format)
        }
        LawyerCommands::Update(args) => {
            let user = ctx.require_user()?;
            let lawyer = ctx
                .client
                .update_lawyer(&user.id, &lawyer_update(args))
                .await?;
            output(&lawyer, flags.format)
        }
        LawyerCommands::Specialties { codes } => {
            let user = ctx.require_user()?;
            let codes = codes.iter().map(|c| c.trim().to_uppercase()).collect();
            let lawyer = ctx.client.update_lawyer_specialties(&user.id, codes).await?;
            output(&lawyer, flags.format)
        }
    }
}

/// Trimmed form fields shared with `lexa client`.
pub fn profile_fields(args: &ProfileArgs) -> ProfileFields {
    ProfileFields {
        name: FullName {
            firstname: args.firstname.trim().to_string(),
            lastname: args.lastname.trim().to_string(),
        },
        dni: args.dni.trim().to_string(),
        contact_info: ContactInfo {
            phone_number: args.phone.trim().to_string(),
            address: args.address.trim().to_string(),
        },
    }
}

fn lawyer_update(args: &LawyerProfileArgs) -> lexa_core::requests::UpdateLawyerProfileRequest {
    profile_fields(&args.profile)
        .into_lawyer_update(args.description.trim().to_string(), args.specialties.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args() -> ProfileArgs {
        ProfileArgs {
            firstname: "  Luis ".into(),
            lastname: "Pérez".into(),
            dni: " 12345678 ".into(),
            phone: "999 111 222".into(),
            address: String::new(),
        }
    }

    #[test]
    fn profile_fields_are_trimmed() {
        let fields = profile_fields(&args());
        assert_eq!(fields.name.display(), "Luis Pérez");
        assert_eq!(fields.dni, "12345678");
        assert_eq!(fields.contact_info.phone_number, "999 111 222");
    }

    #[test]
    fn lawyer_update_keeps_specialties() {
        let update = lawyer_update(&LawyerProfileArgs {
            profile: args(),
            description: " Penalista ".into(),
            specialties: vec!["CRIMINAL_LAW".into()],
        });
        assert_eq!(update.description, "Penalista");
        assert_eq!(update.specialties, vec!["CRIMINAL_LAW"]);
    }
}
