//! Uninstall, upgrade, backup and restore commands

use crate::error::Result;
use crate::installer::Installer;
use crate::ui;

pub fn uninstall(installer: &Installer) -> Result<()> {
    installer.uninstall()?;
    ui::success("mamba-githook uninstalled");
    Ok(())
}

pub fn upgrade(installer: &Installer) -> Result<()> {
    installer.upgrade()?;
    ui::success("mamba-githook upgraded");
    ui::notice(&format!(
        "Previous version kept in {}",
        installer.context().backup_dir().display()
    ));
    Ok(())
}

pub fn backup(installer: &Installer) -> Result<()> {
    installer.backup()?;
    ui::success(&format!(
        "Backup written to {}",
        installer.context().backup_dir().display()
    ));
    Ok(())
}

pub fn restore(installer: &Installer) -> Result<()> {
    installer.restore()?;
    ui::success("mamba-githook restored from backup");
    Ok(())
}
