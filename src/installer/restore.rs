use tracing::{debug, info};

use crate::error::{Result, StepContext, backup};
use crate::paths::{BINARY_NAME, MAN_PAGE_NAME};
use crate::transfer;

use super::Installer;
use super::backup::{SNAPSHOT_TARGET, sibling_tempdir, snapshot_binary, snapshot_man_page};

impl Installer {
    /// Rebuilds the installation from the backup directory.
    ///
    /// Everything is staged next to the target directory first; only the
    /// final renames touch the live installation. The backup is left as is.
    pub(super) fn restore_steps(&self) -> Result<()> {
        let backup_dir = self.ctx.backup_dir();
        info!(backup = %backup_dir.display(), "restoring from backup");

        if !backup_dir.is_dir() {
            return Err(backup::not_found(backup_dir));
        }

        let target = self.ctx.target_dir();
        let staging =
            sibling_tempdir(target, "mamba-githook-restore").step("create staging directory")?;
        let staged_target = staging.path().join(SNAPSHOT_TARGET);
        let staged_binary = staging.path().join(BINARY_NAME);

        transfer::copy_tree(&backup_dir.join(SNAPSHOT_TARGET), &staged_target)
            .step("restore target directory")?;
        transfer::copy_file(&snapshot_binary(backup_dir), &staged_binary).step("restore binary")?;

        let staged_man_page = match self.ctx.man_page_path() {
            Some(_) if snapshot_man_page(backup_dir).is_file() => {
                let staged = staging.path().join(MAN_PAGE_NAME);
                transfer::copy_file(&snapshot_man_page(backup_dir), &staged)
                    .step("restore man page")?;
                Some(staged)
            }
            _ => None,
        };

        transfer::set_permissions(&staged_target).step("set permissions")?;
        transfer::set_mode(&staged_binary, transfer::EXECUTABLE_MODE).step("set permissions")?;
        if let Some(staged) = &staged_man_page {
            transfer::set_mode(staged, transfer::REGULAR_MODE).step("set permissions")?;
        }

        transfer::remove_dir_if_exists(target).step("remove target directory")?;
        transfer::move_path(&staged_target, target).step("move target directory into place")?;
        debug!(target = %target.display(), "target directory restored");

        let binary = self.ctx.binary_path();
        transfer::ensure_parent_dir(&binary).step("move binary into place")?;
        transfer::move_path(&staged_binary, &binary).step("move binary into place")?;

        if let (Some(staged), Some(man_page)) = (staged_man_page, self.ctx.man_page_path()) {
            transfer::ensure_parent_dir(&man_page).step("move man page into place")?;
            transfer::move_path(&staged, &man_page).step("move man page into place")?;
        }

        info!("restore complete");
        Ok(())
    }
}
