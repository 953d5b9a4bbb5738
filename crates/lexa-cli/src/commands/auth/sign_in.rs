use anyhow::Context;
use lexa_core::enums::Role;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthSignInArgs;
use crate::commands::shared::prompt::Prompt;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct SignInResponse {
    user_id: String,
    username: String,
    role: Role,
}

pub async fn handle(args: &AuthSignInArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let password = match &args.password {
        Some(password) => password.clone(),
        None => Prompt::stdin().require("password: ").await?,
    };

    let user = ctx
        .client
        .sign_in(&args.username, &password)
        .await
        .context("sign-in failed")?;

    output(
        &SignInResponse {
            role: user.role(),
            user_id: user.id,
            username: user.username,
        },
        flags.format,
    )
}
