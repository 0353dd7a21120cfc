//! Persistent environment configuration
//!
//! The installer declares two variables: `PATH` gains the binary directory and
//! `MAMBA_GITHOOK_DIR` points at the target directory. How they persist depends
//! on the platform:
//! - POSIX-like systems: `export` lines in the shell's startup file
//! - Windows: user variables under `HKCU\Environment`

mod posix;
mod windows;

use std::fmt;
use std::path::PathBuf;

use crate::error::Result;
use crate::paths::{DIR_VAR, InstallationContext, OsKind};

pub use posix::ShellRcEnvironment;
pub use windows::WindowsEnvironment;

/// Value of a declared variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvValue {
    /// Directory appended to a `PATH`-like list
    PathEntry(PathBuf),
    /// Plain value
    Value(String),
}

/// One `(name, value)` declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVar {
    pub name: String,
    pub value: EnvValue,
}

impl EnvVar {
    pub fn path_entry(name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            value: EnvValue::PathEntry(dir.into()),
        }
    }

    pub fn value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: EnvValue::Value(value.into()),
        }
    }

    /// The text identifying this declaration in persisted configuration.
    pub fn marker(&self) -> String {
        match &self.value {
            EnvValue::PathEntry(dir) => dir.display().to_string(),
            EnvValue::Value(value) => value.clone(),
        }
    }
}

impl fmt::Display for EnvVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            EnvValue::PathEntry(dir) => write!(f, "{} += {}", self.name, dir.display()),
            EnvValue::Value(value) => write!(f, "{}={}", self.name, value),
        }
    }
}

/// Variables an installation declares, in the order they are written.
pub fn declarations(ctx: &InstallationContext) -> Vec<EnvVar> {
    vec![
        EnvVar::path_entry("PATH", ctx.bin_dir()),
        EnvVar::value(DIR_VAR, ctx.target_dir().display().to_string()),
    ]
}

/// Platform mechanism for persisting environment variables
pub trait Environment {
    /// Persists every declaration; stops at the first failure.
    fn set_env(&self, vars: &[EnvVar]) -> Result<()>;

    /// Retracts previously persisted declarations.
    fn unset_env(&self, vars: &[EnvVar]) -> Result<()>;

    /// Read-only check; one warning per missing or wrong declaration.
    ///
    /// Errors only when the persisted configuration cannot be read at all.
    fn check_env(&self, vars: &[EnvVar]) -> Result<Vec<String>>;
}

/// Picks the backend for the context's OS.
pub fn for_context(ctx: &InstallationContext) -> Box<dyn Environment> {
    match ctx.os() {
        OsKind::Posix => Box::new(ShellRcEnvironment::new(
            ctx.shell_config().to_path_buf(),
            ctx.shell().clone(),
        )),
        OsKind::Windows => Box::new(WindowsEnvironment::new()),
    }
}
