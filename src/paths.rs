//! Install locations and the per-run installation context
//!
//! Everything here is derived from the home directory, the OS kind and the
//! shell. Nothing is persisted; the context is rebuilt on every invocation.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{InstallerError, Result, config};

/// Name of the installed tool.
pub const APP_NAME: &str = "mamba-githook";

/// File name of the tool's executable inside the asset tree and in `bin_dir`.
pub const BINARY_NAME: &str = APP_NAME;

/// File name of the man page inside the asset tree.
pub const MAN_PAGE_NAME: &str = "mamba-githook.1";

/// Subdirectory of the target directory holding executable hook scripts.
pub const HOOKS_DIR: &str = "hooks";

/// Environment variable pointing at the target directory.
pub const DIR_VAR: &str = "MAMBA_GITHOOK_DIR";

/// Operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsKind {
    /// Linux and macOS
    Posix,
    Windows,
}

impl OsKind {
    /// OS kind of the running process
    pub fn current() -> Result<Self> {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Maps a `std::env::consts::OS` value to an OS kind.
    ///
    /// No fallback is guessed for unknown systems.
    pub fn from_os_name(os: &str) -> Result<Self> {
        match os {
            "linux" | "macos" => Ok(OsKind::Posix),
            "windows" => Ok(OsKind::Windows),
            other => Err(config::unsupported_os(other)),
        }
    }

    /// Shell assumed when `SHELL` is not set.
    pub fn default_shell(self) -> &'static str {
        match self {
            OsKind::Posix => "sh",
            OsKind::Windows => "cmd",
        }
    }

    /// Resolves install locations under `home`.
    pub fn layout(self, home: &Path) -> Layout {
        let (target_dir, bin_dir, man_page_dir) = match self {
            OsKind::Posix => {
                let local = home.join(".local");
                (
                    local.join("share").join(APP_NAME),
                    local.join("bin"),
                    Some(local.join("share").join("man").join("man1")),
                )
            }
            OsKind::Windows => {
                let local = home.join("AppData").join("Local");
                (local.join(APP_NAME), local.join("bin"), None)
            }
        };

        Layout {
            target_dir,
            bin_dir,
            backup_dir: home.join(format!(".{APP_NAME}-backup")),
            man_page_dir,
        }
    }
}

impl fmt::Display for OsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsKind::Posix => write!(f, "posix"),
            OsKind::Windows => write!(f, "windows"),
        }
    }
}

/// Install locations for one home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub target_dir: PathBuf,
    pub bin_dir: PathBuf,
    pub backup_dir: PathBuf,
    /// `None` where the platform has no man pages.
    pub man_page_dir: Option<PathBuf>,
}

/// Shell the user runs, used to pick the rc file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellKind {
    Bash,
    Zsh,
    Fish,
    Other(String),
}

impl ShellKind {
    /// Detects the shell from a `SHELL`-like value, falling back to the OS default.
    pub fn detect(shell_var: Option<&str>, os: OsKind) -> Self {
        let name = shell_var
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                Path::new(s)
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| s.to_string())
            })
            .unwrap_or_else(|| os.default_shell().to_string());

        Self::from_name(&name)
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "bash" => ShellKind::Bash,
            "zsh" => ShellKind::Zsh,
            "fish" => ShellKind::Fish,
            other => ShellKind::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ShellKind::Bash => "bash",
            ShellKind::Zsh => "zsh",
            ShellKind::Fish => "fish",
            ShellKind::Other(name) => name,
        }
    }

    /// Startup file the environment declarations are written to.
    pub fn config_file(&self, home: &Path) -> PathBuf {
        match self {
            ShellKind::Bash => home.join(".bashrc"),
            ShellKind::Zsh => home.join(".zshrc"),
            ShellKind::Fish => home.join(".config").join("fish").join("config.fish"),
            ShellKind::Other(_) => home.join(".profile"),
        }
    }
}

impl fmt::Display for ShellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration threaded through every lifecycle operation.
///
/// Built once per process; the directories are pure functions of the home
/// directory and OS kind and cannot be changed afterwards.
#[derive(Debug, Clone)]
pub struct InstallationContext {
    home_dir: PathBuf,
    layout: Layout,
    os: OsKind,
    shell: ShellKind,
    shell_config: PathBuf,
    project_dir: PathBuf,
}

impl InstallationContext {
    pub fn new(home_dir: PathBuf, os: OsKind, shell: ShellKind, project_dir: PathBuf) -> Self {
        let layout = os.layout(&home_dir);
        let shell_config = shell.config_file(&home_dir);
        Self {
            home_dir,
            layout,
            os,
            shell,
            shell_config,
            project_dir,
        }
    }

    /// Discovers the context from the running process.
    ///
    /// `home_override` takes precedence over the user's home directory.
    pub fn discover(home_override: Option<PathBuf>) -> Result<Self> {
        let os = OsKind::current()?;
        let home_dir = match home_override {
            Some(home) => home,
            None => dirs::home_dir().ok_or(InstallerError::HomeDirNotFound)?,
        };
        let shell_var = std::env::var("SHELL").ok();
        let shell = ShellKind::detect(shell_var.as_deref(), os);

        // The installer ships in <project>/<installer-dir>/<exe>.
        let exe = std::env::current_exe().map_err(config::executable_unknown)?;
        let project_dir = exe
            .parent()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .ok_or_else(|| config::executable_unknown(exe.display()))?;

        Ok(Self::new(home_dir, os, shell, project_dir))
    }

    pub fn home_dir(&self) -> &Path {
        &self.home_dir
    }

    pub fn target_dir(&self) -> &Path {
        &self.layout.target_dir
    }

    pub fn bin_dir(&self) -> &Path {
        &self.layout.bin_dir
    }

    pub fn backup_dir(&self) -> &Path {
        &self.layout.backup_dir
    }

    pub fn man_page_dir(&self) -> Option<&Path> {
        self.layout.man_page_dir.as_deref()
    }

    pub fn os(&self) -> OsKind {
        self.os
    }

    pub fn shell(&self) -> &ShellKind {
        &self.shell
    }

    pub fn shell_config(&self) -> &Path {
        &self.shell_config
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Installed executable
    pub fn binary_path(&self) -> PathBuf {
        self.layout.bin_dir.join(BINARY_NAME)
    }

    /// Installed man page, if the platform has man pages
    pub fn man_page_path(&self) -> Option<PathBuf> {
        self.man_page_dir().map(|dir| dir.join(MAN_PAGE_NAME))
    }

    /// Value the global Git hook path is set to
    pub fn hooks_dir(&self) -> PathBuf {
        self.layout.target_dir.join(HOOKS_DIR)
    }
}
