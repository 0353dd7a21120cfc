//! Shell and OS environment errors

use std::fmt::Display;

use super::InstallerError;

/// Creates an external environment command error
pub fn command_failed(command: impl Into<String>, reason: impl Display) -> InstallerError {
    InstallerError::EnvCommandFailed {
        command: command.into(),
        reason: reason.to_string(),
    }
}
