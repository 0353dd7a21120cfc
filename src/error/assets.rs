//! Bundled asset errors

use std::fmt::Display;

use super::InstallerError;

/// Creates a missing asset error
pub fn not_found(path: impl Into<String>) -> InstallerError {
    InstallerError::AssetNotFound { path: path.into() }
}

/// Creates an asset read error
pub fn read_failed(path: impl Into<String>, reason: impl Display) -> InstallerError {
    InstallerError::AssetReadFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}
