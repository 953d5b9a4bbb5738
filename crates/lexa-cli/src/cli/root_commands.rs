use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    ApplicationCommands, AuthCommands, CaseCommands, ClientCommands, CommentCommands,
    DocumentCommands, InvitationCommands, LawyerCommands, MessageCommands, SpecialtyCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign up, sign in, sign out.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Cases.
    Case {
        #[command(subcommand)]
        action: CaseCommands,
    },
    /// Lawyer applications to cases.
    Application {
        #[command(subcommand)]
        action: ApplicationCommands,
    },
    /// Client invitations to lawyers.
    Invitation {
        #[command(subcommand)]
        action: InvitationCommands,
    },
    /// Case documents.
    Document {
        #[command(subcommand)]
        action: DocumentCommands,
    },
    /// Case comments.
    Comment {
        #[command(subcommand)]
        action: CommentCommands,
    },
    /// Case chat messages.
    Message {
        #[command(subcommand)]
        action: MessageCommands,
    },
    /// Lawyer profiles.
    Lawyer {
        #[command(subcommand)]
        action: LawyerCommands,
    },
    /// Client profiles.
    Client {
        #[command(subcommand)]
        action: ClientCommands,
    },
    /// Legal specialty catalog.
    Specialty {
        #[command(subcommand)]
        action: SpecialtyCommands,
    },
    /// Interactive recommendations: suggested cases or lawyers, one at a time.
    Feed(FeedArgs),
    /// Dump JSON schema for a wire entity.
    Schema(SchemaArgs),
}

/// Arguments for `lexa feed`.
#[derive(Clone, Debug, Args)]
pub struct FeedArgs {
    /// Print the candidates and exit instead of prompting.
    #[arg(long)]
    pub list: bool,
}

/// Arguments for `lexa schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Entity name (e.g. case, application, document, lawyer).
    pub type_name: String,
}
