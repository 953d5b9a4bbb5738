use clap::Subcommand;

/// Application commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ApplicationCommands {
    /// Apply to an OPEN case (lawyer).
    Submit {
        case_id: String,
        #[arg(long)]
        message: String,
    },
    /// List applications for a case, or your own.
    List {
        #[arg(long)]
        case: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Accept an application on a case in evaluation (owning client).
    Accept {
        id: String,
        #[arg(long)]
        case: String,
    },
    /// Reject an application on a case in evaluation (owning client).
    Reject {
        id: String,
        #[arg(long)]
        case: String,
    },
}
