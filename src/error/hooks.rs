//! Global Git hook path errors

use super::InstallerError;

/// Creates a git configuration error
pub fn git_config_failed(message: impl Into<String>) -> InstallerError {
    InstallerError::GitConfigFailed {
        message: message.into(),
    }
}
