use clap::Subcommand;

/// Invitation commands.
#[derive(Clone, Debug, Subcommand)]
pub enum InvitationCommands {
    /// Invite a lawyer to one of your cases (client).
    Send {
        case_id: String,
        lawyer_id: String,
        /// Defaults to a stock invitation naming the case.
        #[arg(long)]
        message: Option<String>,
    },
    /// List invitations for a case, or those addressed to you.
    List {
        #[arg(long)]
        case: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Accept an invitation (lawyer).
    Accept { id: String },
    /// Decline an invitation (lawyer).
    Reject { id: String },
}
