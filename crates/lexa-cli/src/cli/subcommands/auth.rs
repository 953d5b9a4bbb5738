use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Create an account.
    SignUp(AuthSignUpArgs),
    /// Sign in and store the session.
    SignIn(AuthSignInArgs),
    /// Clear the stored session.
    SignOut,
    /// Show current session status.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthSignUpArgs {
    pub username: String,
    /// Account role: client or lawyer.
    #[arg(long, default_value = "client")]
    pub role: String,
    /// Password (read from stdin when omitted).
    #[arg(long)]
    pub password: Option<String>,
    /// Password confirmation (defaults to a second stdin line).
    #[arg(long, requires = "password")]
    pub confirm_password: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AuthSignInArgs {
    pub username: String,
    /// Password (read from stdin when omitted).
    #[arg(long)]
    pub password: Option<String>,
}
