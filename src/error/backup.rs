//! Backup snapshot errors

use std::path::Path;

use super::InstallerError;

/// Creates a missing backup error
pub fn not_found(path: &Path) -> InstallerError {
    InstallerError::BackupNotFound {
        path: path.display().to_string(),
    }
}

/// Creates an error for an installation that cannot be snapshotted
pub fn source_missing(path: &Path) -> InstallerError {
    InstallerError::BackupSourceMissing {
        path: path.display().to_string(),
    }
}
