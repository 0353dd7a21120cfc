//! Global Git hook path (`core.hooksPath`)

mod git_config;

use std::path::Path;

use crate::error::Result;

pub use git_config::GitGlobalConfig;

/// Config key owned by the installer.
pub const HOOKS_PATH_KEY: &str = "core.hooksPath";

/// Read/write access to the global hook path setting.
pub trait HooksPath {
    fn set_hooks_path(&self, path: &Path) -> Result<()>;

    /// Clears the setting. A setting that was never there is an error.
    fn unset_hooks_path(&self) -> Result<()>;

    fn hooks_path(&self) -> Result<Option<String>>;

    /// Warning when the setting is missing or points elsewhere.
    ///
    /// Unreadable configuration is reported as a warning too.
    fn check_hooks_path(&self, expected: &Path) -> Option<String> {
        let expected = expected.display().to_string();
        match self.hooks_path() {
            Ok(Some(current)) if current == expected => None,
            Ok(Some(current)) => Some(format!(
                "{HOOKS_PATH_KEY} is set to {current}, expected {expected}"
            )),
            Ok(None) => Some(format!("{HOOKS_PATH_KEY} is not set")),
            Err(e) => Some(format!("could not read {HOOKS_PATH_KEY}: {e}")),
        }
    }
}
