//! Environment discovery errors

use super::InstallerError;

/// Creates an unsupported OS error
pub fn unsupported_os(os: impl Into<String>) -> InstallerError {
    InstallerError::UnsupportedOs { os: os.into() }
}

/// Creates an executable location error
pub fn executable_unknown(reason: impl ToString) -> InstallerError {
    InstallerError::ExecutableUnknown {
        reason: reason.to_string(),
    }
}
