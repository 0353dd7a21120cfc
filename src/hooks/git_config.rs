//! `core.hooksPath` in the user's global Git config file, through `git2`

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{InstallerError, Result, fs as fs_err, hooks};
use crate::transfer;

use super::{HOOKS_PATH_KEY, HooksPath};

/// Picks the file `git config --global` would write to.
///
/// `GIT_CONFIG_GLOBAL` wins; then an existing `~/.gitconfig`; then an existing
/// XDG config; otherwise `~/.gitconfig` is created on first write.
pub fn resolve_global_config(
    home: &Path,
    git_config_global: Option<PathBuf>,
    xdg_config_home: Option<PathBuf>,
) -> PathBuf {
    if let Some(path) = git_config_global.filter(|p| !p.as_os_str().is_empty()) {
        return path;
    }

    let dotfile = home.join(".gitconfig");
    if dotfile.is_file() {
        return dotfile;
    }

    let xdg = xdg_config_home
        .filter(|p| p.is_absolute())
        .unwrap_or_else(|| home.join(".config"))
        .join("git")
        .join("config");
    if xdg.is_file() {
        return xdg;
    }

    dotfile
}

/// Global Git config file backend
#[derive(Debug, Clone)]
pub struct GitGlobalConfig {
    path: PathBuf,
}

impl GitGlobalConfig {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Resolves the config file for `home` from the process environment.
    pub fn discover(home: &Path) -> Self {
        let path = resolve_global_config(
            home,
            std::env::var_os("GIT_CONFIG_GLOBAL").map(PathBuf::from),
            std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        );
        Self::new(path)
    }

    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> Result<git2::Config> {
        git2::Config::open(&self.path).map_err(|e| {
            hooks::git_config_failed(format!("{}: {}", self.path.display(), e.message()))
        })
    }
}

impl HooksPath for GitGlobalConfig {
    fn set_hooks_path(&self, path: &Path) -> Result<()> {
        if !self.path.exists() {
            transfer::ensure_parent_dir(&self.path)?;
            fs::write(&self.path, "").map_err(|e| fs_err::write_failed(&self.path, e))?;
        }

        let value = path.display().to_string();
        let mut config = self.open()?;
        config.set_str(HOOKS_PATH_KEY, &value)?;
        debug!(file = %self.path.display(), value = %value, "set {HOOKS_PATH_KEY}");
        Ok(())
    }

    fn unset_hooks_path(&self) -> Result<()> {
        if !self.path.exists() {
            return Err(InstallerError::HooksPathNotSet);
        }

        let mut config = self.open()?;
        match config.remove(HOOKS_PATH_KEY) {
            Ok(()) => {
                debug!(file = %self.path.display(), "unset {HOOKS_PATH_KEY}");
                Ok(())
            }
            Err(err) if err.code() == git2::ErrorCode::NotFound => {
                Err(InstallerError::HooksPathNotSet)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn hooks_path(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let config = self.open()?;
        match config.get_entry(HOOKS_PATH_KEY) {
            Ok(entry) => Ok(entry.value().map(str::to_string)),
            Err(err) if err.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}
