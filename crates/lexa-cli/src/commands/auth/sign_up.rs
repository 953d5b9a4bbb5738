use lexa_api::auth::SignUpForm;
use lexa_core::entities::UserAccount;
use lexa_core::enums::Role;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthSignUpArgs;
use crate::commands::shared::prompt::Prompt;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct SignUpResponse {
    account: UserAccount,
    next: &'static str,
}

pub async fn handle(args: &AuthSignUpArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let role: Role = args.role.parse()?;
    let (password, confirm_password) = match (&args.password, &args.confirm_password) {
        (Some(password), Some(confirm)) => (password.clone(), confirm.clone()),
        (Some(password), None) => (password.clone(), password.clone()),
        (None, _) => {
            let mut prompt = Prompt::stdin();
            let password = prompt.require("password: ").await?;
            let confirm = prompt.require("confirm password: ").await?;
            (password, confirm)
        }
    };

    let account = ctx
        .client
        .sign_up(SignUpForm {
            username: args.username.clone(),
            password,
            confirm_password,
            role,
        })
        .await?;

    output(
        &SignUpResponse {
            account,
            next: "lexa auth sign-in",
        },
        flags.format,
    )
}
