//! Command implementations for the installer CLI

pub mod completions;
pub mod helpers;
pub mod install;
pub mod lifecycle;
pub mod status;

use crate::cli::{Cli, Commands};
use crate::error::Result;

/// Runs the parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let options = helpers::GlobalOptions::from(&cli);

    match cli.command {
        Commands::Completions(args) => completions::run(args),
        Commands::Install(args) => install::run(&helpers::installer(&options)?, args),
        Commands::Uninstall => lifecycle::uninstall(&helpers::installer(&options)?),
        Commands::Upgrade => lifecycle::upgrade(&helpers::installer(&options)?),
        Commands::Backup => lifecycle::backup(&helpers::installer(&options)?),
        Commands::Restore => lifecycle::restore(&helpers::installer(&options)?),
        Commands::Status => status::run(&helpers::installer(&options)?),
    }
}
