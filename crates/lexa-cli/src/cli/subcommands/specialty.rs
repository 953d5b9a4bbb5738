use clap::Subcommand;

/// Specialty catalog commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SpecialtyCommands {
    /// List specialties with display names.
    List,
}
