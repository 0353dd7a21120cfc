//! Terminal output for command results

use console::Style;

use crate::installer::{InstallState, StatusReport};
use crate::paths::InstallationContext;

macro_rules! field {
    ($out:expr, $label:expr, $value:expr) => {
        $out.push_str(&format!(
            "  {} {}\n",
            Style::new().bold().apply_to($label),
            $value
        ))
    };
}

/// Renders a status report as the lines printed by `status`.
pub fn format_status(ctx: &InstallationContext, report: &StatusReport) -> String {
    let mut out = String::new();

    let state = match report.state {
        InstallState::Installed if report.is_healthy() => {
            Style::new().green().bold().apply_to("installed")
        }
        InstallState::Installed => {
            Style::new()
                .yellow()
                .bold()
                .apply_to("installed, needs attention")
        }
        InstallState::BinaryMissing => {
            Style::new().red().bold().apply_to("broken, binary missing")
        }
        InstallState::NotInstalled => Style::new().dim().apply_to("not installed"),
    };
    field!(out, "Status:", state);

    if report.state != InstallState::NotInstalled {
        field!(out, "Files:", ctx.target_dir().display());
        field!(out, "Binary:", ctx.binary_path().display());
        field!(out, "Shell config:", ctx.shell_config().display());
    }

    let backup = if report.backup_present {
        ctx.backup_dir().display().to_string()
    } else {
        Style::new().dim().apply_to("none").to_string()
    };
    field!(out, "Backup:", backup);

    if !report.warnings.is_empty() {
        out.push_str(&format!("  {}\n", Style::new().bold().apply_to("Warnings:")));
        for warning in &report.warnings {
            out.push_str(&format!("    - {}\n", Style::new().yellow().apply_to(warning)));
        }
    }
    out
}

pub fn display_status(ctx: &InstallationContext, report: &StatusReport) {
    print!("{}", format_status(ctx, report));
}

pub fn success(message: &str) {
    println!("{} {}", Style::new().green().bold().apply_to("✔"), message);
}

pub fn notice(message: &str) {
    println!("{}", Style::new().dim().apply_to(message));
}
