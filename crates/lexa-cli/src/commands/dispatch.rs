use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::Case { action } => commands::case::handle(&action, ctx, flags).await,
        Commands::Application { action } => {
            commands::application::handle(&action, ctx, flags).await
        }
        Commands::Invitation { action } => commands::invitation::handle(&action, ctx, flags).await,
        Commands::Document { action } => commands::document::handle(&action, ctx, flags).await,
        Commands::Comment { action } => commands::comment::handle(&action, ctx, flags).await,
        Commands::Message { action } => commands::message::handle(&action, ctx, flags).await,
        Commands::Lawyer { action } => commands::lawyer::handle(&action, ctx, flags).await,
        Commands::Client { action } => commands::client::handle(&action, ctx, flags).await,
        Commands::Specialty { action } => commands::specialty::handle(&action, ctx, flags).await,
        Commands::Feed(args) => commands::feed::handle(&args, ctx, flags).await,
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
