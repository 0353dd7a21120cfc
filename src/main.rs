//! mamba-githook installer
//!
//! Installs, uninstalls, upgrades, backs up, restores and checks a local
//! mamba-githook installation: the executable, the hook scripts, the man page,
//! the shell environment and Git's global `core.hooksPath`.

use clap::Parser;
use miette::Diagnostic;

mod assets;
mod cli;
mod commands;
mod environment;
mod error;
mod hooks;
mod installer;
mod logging;
mod paths;
mod transfer;
mod ui;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        eprintln!("Error: {e}");
        if let Some(help) = e.root_cause().help() {
            eprintln!("Help: {help}");
        }
        std::process::exit(1);
    }
}
