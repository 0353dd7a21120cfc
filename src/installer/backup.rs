//! Snapshot of the installed file set
//!
//! Layout of the backup directory:
//! ```text
//! <backup_dir>/target/...                   copy of the target directory
//! <backup_dir>/mamba-githook                the binary
//! <backup_dir>/man/man1/mamba-githook.1     man page, when one is installed
//! ```
//! A new snapshot is assembled next to the backup directory and swapped in
//! with renames, so an interrupted backup never damages the previous one.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Result, StepContext, backup, fs as fs_err};
use crate::paths::{BINARY_NAME, MAN_PAGE_NAME};
use crate::transfer;

use super::Installer;

pub(super) const SNAPSHOT_TARGET: &str = "target";

pub(super) fn snapshot_binary(root: &Path) -> PathBuf {
    root.join(BINARY_NAME)
}

pub(super) fn snapshot_man_page(root: &Path) -> PathBuf {
    root.join("man").join("man1").join(MAN_PAGE_NAME)
}

/// Temporary directory in the same parent as `dir`.
pub(super) fn sibling_tempdir(dir: &Path, label: &str) -> Result<tempfile::TempDir> {
    let parent = dir.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent).map_err(|e| fs_err::create_dir_failed(parent, e))?;
    tempfile::Builder::new()
        .prefix(&format!(".{label}-"))
        .tempdir_in(parent)
        .map_err(|e| fs_err::create_dir_failed(parent, e))
}

impl Installer {
    pub(super) fn backup_steps(&self) -> Result<()> {
        let backup_dir = self.ctx.backup_dir();
        info!(backup = %backup_dir.display(), "creating backup");

        let binary = self.ctx.binary_path();
        if !binary.is_file() {
            return Err(backup::source_missing(&binary));
        }

        let staging =
            sibling_tempdir(backup_dir, "mamba-githook-backup").step("create backup directory")?;
        let staged = staging.path().join("snapshot");

        let target = self.ctx.target_dir();
        let staged_target = staged.join(SNAPSHOT_TARGET);
        if target.is_dir() {
            transfer::copy_tree(target, &staged_target).step("back up target directory")?;
        } else {
            warn!(target = %target.display(), "target directory missing, backing up an empty tree");
            fs::create_dir_all(&staged_target)
                .map_err(|e| fs_err::create_dir_failed(&staged_target, e))
                .step("back up target directory")?;
        }

        transfer::copy_file(&binary, &snapshot_binary(&staged)).step("back up binary")?;

        if let Some(man_page) = self.ctx.man_page_path().filter(|p| p.is_file()) {
            transfer::copy_file(&man_page, &snapshot_man_page(&staged)).step("back up man page")?;
        }

        swap_into_place(&staged, backup_dir, staging.path()).step("replace previous backup")?;

        info!("backup created");
        Ok(())
    }
}

/// Moves `staged` to `dest`, parking any previous `dest` under `scratch`.
///
/// The previous snapshot is put back if the final rename fails.
fn swap_into_place(staged: &Path, dest: &Path, scratch: &Path) -> Result<()> {
    let previous = scratch.join("previous");
    let had_previous = dest.exists();
    if had_previous {
        fs::rename(dest, &previous).map_err(|e| fs_err::rename_failed(dest, &previous, e))?;
        debug!(from = %dest.display(), "parked previous backup");
    }

    if let Err(e) = fs::rename(staged, dest) {
        if had_previous {
            if let Err(restore_err) = fs::rename(&previous, dest) {
                warn!(error = %restore_err, "could not put the previous backup back");
            }
        }
        return Err(fs_err::rename_failed(staged, dest, e));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_swap_replaces_previous() {
        let temp = TempDir::new().unwrap();
        let scratch = temp.path().join("scratch");
        fs::create_dir_all(&scratch).unwrap();
        let staged = scratch.join("snapshot");
        fs::create_dir_all(&staged).unwrap();
        fs::write(staged.join("new"), "new").unwrap();
        let dest = temp.path().join("backup");
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("old"), "old").unwrap();

        swap_into_place(&staged, &dest, &scratch).unwrap();

        assert!(dest.join("new").is_file());
        assert!(!dest.join("old").exists());
    }

    #[test]
    fn test_swap_failure_keeps_previous() {
        let temp = TempDir::new().unwrap();
        let scratch = temp.path().join("scratch");
        fs::create_dir_all(&scratch).unwrap();
        let dest = temp.path().join("backup");
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("old"), "old").unwrap();

        let result = swap_into_place(&scratch.join("missing"), &dest, &scratch);

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(dest.join("old")).unwrap(), "old");
    }

    #[test]
    fn test_snapshot_paths() {
        let root = Path::new("/b");
        assert_eq!(snapshot_binary(root), PathBuf::from("/b/mamba-githook"));
        assert_eq!(
            snapshot_man_page(root),
            PathBuf::from("/b/man/man1/mamba-githook.1")
        );
    }
}
