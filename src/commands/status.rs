//! Status command

use crate::error::Result;
use crate::installer::Installer;
use crate::ui;

/// Prints the installation status; drift never fails the command.
pub fn run(installer: &Installer) -> Result<()> {
    let report = installer.status()?;
    ui::display_status(installer.context(), &report);
    Ok(())
}
