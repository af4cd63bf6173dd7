use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Nav => commands::nav::handle(ctx, flags),
        Commands::Home => commands::home::handle(ctx, flags).await,
        Commands::Courses { action } => commands::courses::handle(&action, ctx, flags).await,
        Commands::Market { action } => commands::market::handle(&action, ctx, flags).await,
        Commands::Alerts { action } => commands::alerts::handle(&action, ctx, flags).await,
        Commands::Wiki { action } => commands::wiki::handle(&action, ctx, flags).await,
        Commands::Chat(args) => commands::chat::handle(&args, ctx, flags).await,
        Commands::Tools { action } => commands::tools::handle(&action, ctx, flags),
        Commands::User { action } => commands::user::handle(&action, ctx, flags).await,
    }
}
