mod application;
mod auth;
mod case;
mod client;
mod comment;
mod document;
mod invitation;
mod lawyer;
mod message;
mod specialty;

pub use application::ApplicationCommands;
pub use auth::{AuthCommands, AuthSignInArgs, AuthSignUpArgs};
pub use case::{CaseBoardArgs, CaseCommands, CaseCreateArgs, CaseListArgs};
pub use client::ClientCommands;
pub use comment::CommentCommands;
pub use document::DocumentCommands;
pub use invitation::InvitationCommands;
pub use lawyer::{LawyerCommands, LawyerProfileArgs};
pub use message::MessageCommands;
pub use specialty::SpecialtyCommands;

use clap::Args;

/// Fields shared by client and lawyer profile forms.
#[derive(Clone, Debug, Args)]
pub struct ProfileArgs {
    #[arg(long)]
    pub firstname: String,
    #[arg(long)]
    pub lastname: String,
    /// National identity document number.
    #[arg(long)]
    pub dni: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub address: String,
}
