use clap::Subcommand;

use super::ProfileArgs;

/// Client profile commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ClientCommands {
    /// List clients.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a client profile by user id (defaults to you).
    Get { user_id: Option<String> },
    /// Create your client profile.
    Create(ProfileArgs),
    /// Replace your client profile.
    Update(ProfileArgs),
}
