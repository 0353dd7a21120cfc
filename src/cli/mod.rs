//! CLI definitions using clap derive API
//!
//! Argument types for commands that take any live in submodules:
//! - install: Install command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod install;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;

/// mamba-githook installer
///
/// Installs mamba-githook, its hook scripts and man page, and points Git's
/// global hook path at them.
#[derive(Parser, Debug)]
#[command(
    name = "mamba-githook-installer",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install, upgrade and back up mamba-githook",
    long_about = "Manages the local mamba-githook installation: the executable, the global \
                  Git hook scripts, the man page, the shell environment and Git's global \
                  core.hooksPath.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  mamba-githook-installer install           \x1b[90m# Install after confirmation\x1b[0m\n   \
                  mamba-githook-installer install -n        \x1b[90m# Install without asking\x1b[0m\n   \
                  mamba-githook-installer upgrade           \x1b[90m# Back up, reinstall, restore on failure\x1b[0m\n   \
                  mamba-githook-installer status            \x1b[90m# Check the installation\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Home directory to install into (defaults to the current user's)
    #[arg(long, global = true, env = "MAMBA_GITHOOK_HOME")]
    pub home: Option<PathBuf>,

    /// Install from this directory instead of the bundled files
    #[arg(long, global = true, env = "MAMBA_GITHOOK_SOURCE")]
    pub source: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install mamba-githook
    Install(InstallArgs),

    /// Remove mamba-githook and its configuration
    Uninstall,

    /// Back up, reinstall, and restore the backup if the install fails
    Upgrade,

    /// Snapshot the current installation
    Backup,

    /// Restore the installation from the last backup
    Restore,

    /// Check the installation
    Status,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_cli_parsing_install() {
        let cli = Cli::try_parse_from(["mamba-githook-installer", "install"]).unwrap();
        match cli.command {
            Commands::Install(args) => assert!(!args.non_interactive),
            _ => panic!("Expected Install command"),
        }
    }

    #[test]
    fn test_cli_parsing_install_non_interactive() {
        let cli = Cli::try_parse_from(["mamba-githook-installer", "install", "-n"]).unwrap();
        match cli.command {
            Commands::Install(args) => assert!(args.non_interactive),
            _ => panic!("Expected Install command"),
        }

        let cli =
            Cli::try_parse_from(["mamba-githook-installer", "install", "--non-interactive"])
                .unwrap();
        assert!(matches!(cli.command, Commands::Install(InstallArgs { non_interactive: true })));
    }

    #[test]
    fn test_cli_parsing_lifecycle_commands() {
        let parse = |name: &str| Cli::try_parse_from(["mamba-githook-installer", name]).unwrap();
        assert!(matches!(parse("uninstall").command, Commands::Uninstall));
        assert!(matches!(parse("upgrade").command, Commands::Upgrade));
        assert!(matches!(parse("backup").command, Commands::Backup));
        assert!(matches!(parse("restore").command, Commands::Restore));
        assert!(matches!(parse("status").command, Commands::Status));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli =
            Cli::try_parse_from(["mamba-githook-installer", "completions", "Zsh"]).unwrap();
        match cli.command {
            Commands::Completions(args) => assert_eq!(args.shell, clap_complete::Shell::Zsh),
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from([
            "mamba-githook-installer",
            "status",
            "-v",
            "--home",
            "/tmp/home",
            "--source",
            "/tmp/assets",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.home, Some(PathBuf::from("/tmp/home")));
        assert_eq!(cli.source, Some(PathBuf::from("/tmp/assets")));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["mamba-githook-installer"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["mamba-githook-installer", "reinstall"]).is_err());
    }

    #[test]
    #[serial]
    fn test_cli_home_env_and_flag() {
        unsafe {
            std::env::set_var("MAMBA_GITHOOK_HOME", "/tmp/env-home");
        }
        let cli = Cli::try_parse_from(["mamba-githook-installer", "status"]).unwrap();
        assert_eq!(cli.home, Some(PathBuf::from("/tmp/env-home")));

        let cli =
            Cli::try_parse_from(["mamba-githook-installer", "status", "--home", "/tmp/flag-home"])
                .unwrap();
        assert_eq!(cli.home, Some(PathBuf::from("/tmp/flag-home")));
        unsafe {
            std::env::remove_var("MAMBA_GITHOOK_HOME");
        }
    }
}
