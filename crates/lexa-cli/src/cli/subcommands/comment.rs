use clap::Subcommand;

/// Comment commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CommentCommands {
    /// Comment on a case.
    Add {
        case_id: String,
        content: String,
        /// Post as the closing remark.
        #[arg(long = "final")]
        is_final: bool,
    },
    /// List a case's comments.
    List { case_id: String },
}
