//! Error types and handling for the installer
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Environment discovery errors (OS, home directory, executable)
//! - [`fs`]: File system errors
//! - [`assets`]: Bundled asset tree errors
//! - [`backup`]: Backup snapshot errors
//! - [`env`]: Shell / OS environment errors
//! - [`hooks`]: Global Git hook path errors

pub mod assets;
pub mod backup;
pub mod config;
pub mod env;
pub mod fs;
pub mod hooks;

#[cfg(test)]
mod tests;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for installer operations
#[derive(Error, Diagnostic, Debug)]
pub enum InstallerError {
    // Configuration errors
    #[error("Unsupported operating system: {os}")]
    #[diagnostic(
        code(mamba_githook::config::unsupported_os),
        help("Supported operating systems: linux, macos, windows")
    )]
    UnsupportedOs { os: String },

    #[error("Could not determine the home directory")]
    #[diagnostic(
        code(mamba_githook::config::home_not_found),
        help("Set HOME, or pass --home / MAMBA_GITHOOK_HOME explicitly")
    )]
    HomeDirNotFound,

    #[error("Could not determine the installer location: {reason}")]
    #[diagnostic(code(mamba_githook::config::executable_unknown))]
    ExecutableUnknown { reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(mamba_githook::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(mamba_githook::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(code(mamba_githook::fs::create_dir_failed))]
    CreateDirFailed { path: String, reason: String },

    #[error("Failed to remove: {path}: {reason}")]
    #[diagnostic(code(mamba_githook::fs::remove_failed))]
    RemoveFailed { path: String, reason: String },

    #[error("Failed to move {from} to {to}: {reason}")]
    #[diagnostic(code(mamba_githook::fs::rename_failed))]
    RenameFailed {
        from: String,
        to: String,
        reason: String,
    },

    #[error("Failed to set permissions on {path}: {reason}")]
    #[diagnostic(code(mamba_githook::fs::permissions_failed))]
    PermissionsFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(mamba_githook::fs::io_error))]
    IoError { message: String },

    // Asset errors
    #[error("Bundled file not found: {path}")]
    #[diagnostic(
        code(mamba_githook::assets::not_found),
        help("The installer was built without this file; rebuild it or pass --source")
    )]
    AssetNotFound { path: String },

    #[error("Failed to read asset file: {path}: {reason}")]
    #[diagnostic(code(mamba_githook::assets::read_failed))]
    AssetReadFailed { path: String, reason: String },

    // Backup errors
    #[error("Backup directory does not exist: {path}")]
    #[diagnostic(
        code(mamba_githook::backup::not_found),
        help("Run 'mamba-githook-installer backup' while mamba-githook is installed")
    )]
    BackupNotFound { path: String },

    #[error("Nothing to back up, missing: {path}")]
    #[diagnostic(
        code(mamba_githook::backup::source_missing),
        help("Run 'mamba-githook-installer install' first")
    )]
    BackupSourceMissing { path: String },

    // Environment errors
    #[error("Environment command '{command}' failed: {reason}")]
    #[diagnostic(code(mamba_githook::env::command_failed))]
    EnvCommandFailed { command: String, reason: String },

    // Git hook path errors
    #[error("Global core.hooksPath is not set")]
    #[diagnostic(
        code(mamba_githook::hooks::not_set),
        help("Nothing to unset; run 'git config --global core.hooksPath' to inspect it")
    )]
    HooksPathNotSet,

    #[error("Git configuration failed: {message}")]
    #[diagnostic(code(mamba_githook::hooks::git_config_failed))]
    GitConfigFailed { message: String },

    // Prompt errors
    #[error("Prompt failed: {message}")]
    #[diagnostic(code(mamba_githook::prompt::failed))]
    PromptFailed { message: String },

    /// A lifecycle step failed; wraps the underlying cause.
    #[error("Failed to {step}: {source}")]
    #[diagnostic(code(mamba_githook::step_failed))]
    StepFailed {
        step: String,
        #[source]
        source: Box<InstallerError>,
    },
}

impl InstallerError {
    /// The innermost error, skipping any step wrappers.
    pub fn root_cause(&self) -> &InstallerError {
        match self {
            InstallerError::StepFailed { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl From<std::io::Error> for InstallerError {
    fn from(err: std::io::Error) -> Self {
        InstallerError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<walkdir::Error> for InstallerError {
    fn from(err: walkdir::Error) -> Self {
        match err.path() {
            Some(path) => InstallerError::FileReadFailed {
                path: path.display().to_string(),
                reason: err.to_string(),
            },
            None => InstallerError::IoError {
                message: err.to_string(),
            },
        }
    }
}

impl From<git2::Error> for InstallerError {
    fn from(err: git2::Error) -> Self {
        InstallerError::GitConfigFailed {
            message: err.message().to_string(),
        }
    }
}

impl From<inquire::InquireError> for InstallerError {
    fn from(err: inquire::InquireError) -> Self {
        InstallerError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, InstallerError>;

/// Names the lifecycle step an error came from.
pub trait StepContext<T> {
    fn step(self, step: &str) -> Result<T>;
}

impl<T> StepContext<T> for Result<T> {
    fn step(self, step: &str) -> Result<T> {
        self.map_err(|source| InstallerError::StepFailed {
            step: step.to_string(),
            source: Box::new(source),
        })
    }
}
