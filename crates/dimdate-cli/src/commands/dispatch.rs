use dimdate_config::DimdateConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: Commands,
    config: DimdateConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Generate(args) => commands::generate::handle(&args, config, flags),
        Commands::Preview(args) => commands::preview::handle(&args, config, flags),
        Commands::Fields(args) => commands::fields::handle(&args, &config, flags),
        Commands::Config => commands::config::handle(&config, flags),
        Commands::Schema => commands::schema::handle(flags),
    }
}
