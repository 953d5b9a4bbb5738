use lexa_auth::{CredentialStore, is_near_expiry, token_expiry};
use lexa_core::enums::Role;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Warn this long before the token's `exp`.
const EXPIRY_BUFFER_SECS: i64 = 300;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    user_id: Option<String>,
    username: Option<String>,
    role: Option<Role>,
    expires_at: Option<String>,
    token_source: Option<String>,
    api_url: String,
    note: Option<String>,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = ctx.session.user();
    let token = ctx.session.token();
    let expiry = token.as_deref().map(token_expiry);

    let note = match (&token, &expiry) {
        (None, _) => Some("not signed in".to_string()),
        (Some(_), Some(Ok(at))) if is_near_expiry(*at, EXPIRY_BUFFER_SECS) => {
            Some("token expired or about to expire; sign in again".to_string())
        }
        (Some(_), Some(Err(error))) => Some(format!("token expiry unknown: {error}")),
        _ if user.is_none() => Some("token from environment; user unknown".to_string()),
        _ => None,
    };

    let status = AuthStatusResponse {
        authenticated: token.is_some(),
        user_id: user.as_ref().map(|u| u.id.clone()),
        username: user.as_ref().map(|u| u.username.clone()),
        role: user.as_ref().map(|u| Role::primary(&u.roles)),
        expires_at: expiry.and_then(Result::ok).map(|at| at.to_rfc3339()),
        token_source: CredentialStore::from_config(&ctx.config.session)
            .ok()
            .and_then(|store| store.token_source())
            .map(|source| source.to_string()),
        api_url: ctx.client.base_url().to_string(),
        note,
    };

    output(&status, flags.format)
}
