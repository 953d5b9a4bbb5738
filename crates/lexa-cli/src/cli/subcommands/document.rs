use std::path::PathBuf;

use clap::Subcommand;

/// Document commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DocumentCommands {
    /// Upload files to a case (PDF, Word, JPEG, PNG; 10 MB each).
    Upload {
        case_id: String,
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// List a case's documents.
    List { case_id: String },
}
