//! Install command

use std::io::IsTerminal;

use inquire::Confirm;

use crate::cli::InstallArgs;
use crate::error::Result;
use crate::installer::Installer;
use crate::paths::InstallationContext;
use crate::ui;

/// Whether to ask before installing.
///
/// Without a terminal on stdin there is nobody to ask, so the install runs
/// as if `--non-interactive` had been given.
pub fn should_prompt(args: &InstallArgs, stdin_is_terminal: bool) -> bool {
    !args.non_interactive && stdin_is_terminal
}

fn confirm_install(ctx: &InstallationContext) -> Result<bool> {
    println!("\nmamba-githook will be installed:");
    println!("  - files into {}", ctx.target_dir().display());
    println!("  - executable into {}", ctx.bin_dir().display());
    println!("  - environment variables into {}", ctx.shell_config().display());
    println!("  - global core.hooksPath set to {}", ctx.hooks_dir().display());
    println!();

    Ok(Confirm::new("Proceed with install?")
        .with_default(true)
        .with_help_message("Press Enter to confirm, or 'n' to cancel")
        .prompt()?)
}

pub fn run(installer: &Installer, args: InstallArgs) -> Result<()> {
    if should_prompt(&args, std::io::stdin().is_terminal())
        && !confirm_install(installer.context())?
    {
        ui::notice("Installation cancelled");
        return Ok(());
    }

    installer.install()?;

    ui::success("mamba-githook installed");
    ui::notice(&format!(
        "Open a new shell or run 'source {}' to pick up the environment changes.",
        installer.context().shell_config().display()
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_prompt() {
        let interactive = InstallArgs::default();
        let non_interactive = InstallArgs {
            non_interactive: true,
        };

        assert!(should_prompt(&interactive, true));
        assert!(!should_prompt(&interactive, false));
        assert!(!should_prompt(&non_interactive, true));
        assert!(!should_prompt(&non_interactive, false));
    }
}
