use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Case commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CaseCommands {
    /// Post a new case, optionally with documents.
    Create(CaseCreateArgs),
    /// List cases visible to you.
    List(CaseListArgs),
    /// Get one case.
    Get { id: String },
    /// Case with applications, documents, comments, messages and permissions.
    Detail { id: String },
    /// Case history, newest first.
    Timeline { id: String },
    /// Close a case (owning client).
    Close { id: String },
    /// Cancel a case (owning client).
    Cancel { id: String },
    /// Browse OPEN cases.
    Board(CaseBoardArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CaseCreateArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: String,
    /// Specialty id (see `lexa specialty list`).
    #[arg(long)]
    pub specialty: Option<i64>,
    /// File to attach; repeatable.
    #[arg(long)]
    pub file: Vec<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct CaseListArgs {
    /// Filter by status (OPEN, EVALUATION, ACCEPTED, CLOSED, CANCELED).
    #[arg(long)]
    pub status: Option<String>,
    /// Every case on the platform rather than your own.
    #[arg(long, conflicts_with = "status")]
    pub all: bool,
    /// Only the most recent few, as on the dashboard.
    #[arg(long)]
    pub recent: bool,
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct CaseBoardArgs {
    /// Text to look for in title or description.
    #[arg(long)]
    pub search: Option<String>,
    /// Specialty name or code.
    #[arg(long)]
    pub specialty: Option<String>,
    /// newest, oldest or relevance.
    #[arg(long, default_value = "newest")]
    pub sort: String,
    #[arg(long)]
    pub limit: Option<u32>,
}
