use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext) -> anyhow::Result<()> {
    match command {
        Commands::Analyze(args) => commands::analyze::handle(args, ctx),
        Commands::Recommend(args) => commands::recommend::handle(args, ctx),
        Commands::Plan(args) => commands::plan::handle(args, ctx),
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
