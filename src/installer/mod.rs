//! Lifecycle orchestration
//!
//! [`Installer`] composes the path layout, file transfer, environment and
//! hook-path adapters into the six lifecycle operations. Each step's error is
//! wrapped with the step's name; nothing is rolled back except by
//! [`Installer::upgrade`], which restores the last snapshot when the new
//! install fails.

mod backup;
mod restore;
mod status;


use std::fs;

use tracing::{Dispatch, debug, error, info};

use crate::assets::AssetSource;
use crate::environment::{self, Environment};
use crate::error::{Result, StepContext, fs as fs_err};
use crate::hooks::{GitGlobalConfig, HooksPath};
use crate::paths::InstallationContext;
use crate::transfer;

pub use status::{InstallState, StatusReport};

pub struct Installer {
    ctx: InstallationContext,
    assets: Box<dyn AssetSource>,
    env: Box<dyn Environment>,
    hooks: Box<dyn HooksPath>,
    log: Dispatch,
}

impl Installer {
    pub fn new(
        ctx: InstallationContext,
        assets: Box<dyn AssetSource>,
        env: Box<dyn Environment>,
        hooks: Box<dyn HooksPath>,
        log: Dispatch,
    ) -> Self {
        Self {
            ctx,
            assets,
            env,
            hooks,
            log,
        }
    }

    /// Installer using the platform environment backend and the global Git
    /// config file.
    pub fn for_context(
        ctx: InstallationContext,
        assets: Box<dyn AssetSource>,
        log: Dispatch,
    ) -> Self {
        let env = environment::for_context(&ctx);
        let hooks = Box::new(GitGlobalConfig::discover(ctx.home_dir()));
        Self::new(ctx, assets, env, hooks, log)
    }

    pub fn context(&self) -> &InstallationContext {
        &self.ctx
    }

    fn logged<T>(&self, f: impl FnOnce() -> Result<T>) -> Result<T> {
        tracing::dispatcher::with_default(&self.log, f)
    }

    pub fn install(&self) -> Result<()> {
        self.logged(|| self.install_steps())
    }

    fn install_steps(&self) -> Result<()> {
        info!(source = %self.assets.describe(), "installing {}", crate::paths::APP_NAME);
        debug!(
            project = %self.ctx.project_dir().display(),
            os = %self.ctx.os(),
            shell = %self.ctx.shell(),
            "installation context"
        );

        self.create_dirs().step("create directories")?;

        let written = transfer::copy_assets(&self.ctx, self.assets.as_ref()).step("copy files")?;
        info!(files = written, target = %self.ctx.target_dir().display(), "copied files");

        self.env
            .set_env(&environment::declarations(&self.ctx))
            .step("set environment variables")?;

        let hooks_dir = self.ctx.hooks_dir();
        self.hooks
            .set_hooks_path(&hooks_dir)
            .step("set git hooks path")?;
        info!(hooks = %hooks_dir.display(), "set git hooks path");

        info!("installation complete");
        Ok(())
    }

    fn create_dirs(&self) -> Result<()> {
        let mut dirs = vec![self.ctx.target_dir(), self.ctx.bin_dir()];
        dirs.extend(self.ctx.man_page_dir());
        for dir in dirs {
            fs::create_dir_all(dir).map_err(|e| fs_err::create_dir_failed(dir, e))?;
        }
        Ok(())
    }

    pub fn uninstall(&self) -> Result<()> {
        self.logged(|| self.uninstall_steps())
    }

    fn uninstall_steps(&self) -> Result<()> {
        info!("uninstalling {}", crate::paths::APP_NAME);

        transfer::remove_dir_if_exists(self.ctx.target_dir()).step("remove target directory")?;
        transfer::remove_file_if_exists(&self.ctx.binary_path()).step("remove binary")?;
        if let Some(man_page) = self.ctx.man_page_path() {
            transfer::remove_file_if_exists(&man_page).step("remove man page")?;
        }

        self.env
            .unset_env(&environment::declarations(&self.ctx))
            .step("remove environment variables")?;
        self.hooks.unset_hooks_path().step("unset git hooks path")?;

        info!("uninstallation complete");
        Ok(())
    }

    /// Backup, uninstall, install; restores the backup if the install fails.
    ///
    /// The install error is returned even when the restore succeeds.
    pub fn upgrade(&self) -> Result<()> {
        self.logged(|| {
            info!("upgrading {}", crate::paths::APP_NAME);
            self.backup_steps().step("back up before upgrade")?;
            self.uninstall_steps().step("uninstall before upgrade")?;

            if let Err(install_err) = self.install_steps() {
                error!(error = %install_err, "upgrade failed, restoring backup");
                if let Err(restore_err) = self.restore_steps() {
                    error!(error = %restore_err, "restore after failed upgrade failed");
                }
                return Err(install_err);
            }

            info!("upgrade complete");
            Ok(())
        })
    }

    pub fn backup(&self) -> Result<()> {
        self.logged(|| self.backup_steps())
    }

    pub fn restore(&self) -> Result<()> {
        self.logged(|| self.restore_steps())
    }

    pub fn status(&self) -> Result<StatusReport> {
        self.logged(|| self.status_steps())
    }
}
