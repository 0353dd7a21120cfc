//! File system errors

use std::fmt::Display;
use std::path::Path;

use super::InstallerError;

/// Creates a file read failed error
pub fn read_failed(path: &Path, reason: impl Display) -> InstallerError {
    InstallerError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: &Path, reason: impl Display) -> InstallerError {
    InstallerError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a directory creation error
pub fn create_dir_failed(path: &Path, reason: impl Display) -> InstallerError {
    InstallerError::CreateDirFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a removal error
pub fn remove_failed(path: &Path, reason: impl Display) -> InstallerError {
    InstallerError::RemoveFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a rename error
pub fn rename_failed(from: &Path, to: &Path, reason: impl Display) -> InstallerError {
    InstallerError::RenameFailed {
        from: from.display().to_string(),
        to: to.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a permissions error
pub fn permissions_failed(path: &Path, reason: impl Display) -> InstallerError {
    InstallerError::PermissionsFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
