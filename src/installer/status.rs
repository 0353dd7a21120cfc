use tracing::{info, warn};

use crate::environment;
use crate::error::{Result, StepContext};

use super::Installer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallState {
    /// No target directory
    NotInstalled,
    /// Target directory present, binary gone
    BinaryMissing,
    Installed,
}

/// Outcome of a status check. Drift is reported as warnings, never errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub state: InstallState,
    pub backup_present: bool,
    pub warnings: Vec<String>,
}

impl StatusReport {
    pub fn is_healthy(&self) -> bool {
        self.state == InstallState::Installed && self.warnings.is_empty()
    }
}

impl Installer {
    pub(super) fn status_steps(&self) -> Result<StatusReport> {
        info!("checking installation status");

        let mut report = StatusReport {
            state: InstallState::NotInstalled,
            backup_present: self.ctx.backup_dir().is_dir(),
            warnings: Vec::new(),
        };

        if !self.ctx.target_dir().is_dir() {
            info!("{} is not installed", crate::paths::APP_NAME);
            return Ok(report);
        }

        if !self.ctx.binary_path().is_file() {
            report.state = InstallState::BinaryMissing;
            report.warnings.push(format!(
                "binary is missing: {}",
                self.ctx.binary_path().display()
            ));
            warn!("{} binary is missing", crate::paths::APP_NAME);
            return Ok(report);
        }

        report.state = InstallState::Installed;
        report.warnings.extend(
            self.env
                .check_env(&environment::declarations(&self.ctx))
                .step("check environment variables")?,
        );
        report
            .warnings
            .extend(self.hooks.check_hooks_path(&self.ctx.hooks_dir()));

        for warning in &report.warnings {
            warn!("{warning}");
        }
        if report.warnings.is_empty() {
            info!("{} is properly installed and configured", crate::paths::APP_NAME);
        }
        Ok(report)
    }
}
