//! Command helper utilities

use std::path::PathBuf;

use crate::assets::{AssetSource, DirectoryAssets, EmbeddedAssets};
use crate::cli::Cli;
use crate::error::Result;
use crate::installer::Installer;
use crate::logging::LogConfig;
use crate::paths::InstallationContext;

/// Flags shared by every subcommand
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub verbose: bool,
    pub home: Option<PathBuf>,
    pub source: Option<PathBuf>,
}

impl From<&Cli> for GlobalOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            verbose: cli.verbose,
            home: cli.home.clone(),
            source: cli.source.clone(),
        }
    }
}

/// Asset tree to install: `--source` if given, the bundled files otherwise.
pub fn asset_source(source: Option<&PathBuf>) -> Box<dyn AssetSource> {
    match source {
        Some(dir) => Box::new(DirectoryAssets::new(dir)),
        None => Box::new(EmbeddedAssets::new()),
    }
}

/// Builds the installer for this process.
pub fn installer(options: &GlobalOptions) -> Result<Installer> {
    let ctx = InstallationContext::discover(options.home.clone())?;
    let log = LogConfig::from_env(options.verbose).dispatch();
    Ok(Installer::for_context(
        ctx,
        asset_source(options.source.as_ref()),
        log,
    ))
}
