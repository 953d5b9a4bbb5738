use clap::{Args, Subcommand};

use super::ProfileArgs;

/// Lawyer profile commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LawyerCommands {
    /// List lawyers.
    List {
        /// Only lawyers with this specialty code.
        #[arg(long)]
        specialty: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a lawyer profile by user id (defaults to you).
    Get { user_id: Option<String> },
    /// Create your lawyer profile.
    Create(LawyerProfileArgs),
    /// Replace your lawyer profile.
    Update(LawyerProfileArgs),
    /// Replace your specialty codes.
    Specialties {
        #[arg(required = true)]
        codes: Vec<String>,
    },
}

#[derive(Clone, Debug, Args)]
pub struct LawyerProfileArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,
    #[arg(long, default_value = "")]
    pub description: String,
    /// Specialty code; repeatable.
    #[arg(long = "specialty")]
    pub specialties: Vec<String>,
}
