use clap::Subcommand;

/// Chat commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MessageCommands {
    /// Send a chat message on a case.
    Send { case_id: String, content: String },
    /// Show a case's chat.
    List { case_id: String },
}
