use clap::Parser;

/// Arguments for install command
#[derive(Parser, Debug, Default)]
pub struct InstallArgs {
    /// Install without asking for confirmation
    #[arg(long, short = 'n')]
    pub non_interactive: bool,
}
