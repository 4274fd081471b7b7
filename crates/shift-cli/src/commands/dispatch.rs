use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext) -> anyhow::Result<()> {
    match command {
        Commands::Schedule { action } => commands::schedule::handle(&action, ctx).await,
        Commands::Task { action } => commands::task::handle(&action, ctx).await,
    }
}
