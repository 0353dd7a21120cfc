//! Common test utilities for installer integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// An isolated home directory plus a private global Git config
pub struct TestHome {
    pub temp: TempDir,
    pub home: PathBuf,
    pub git_config: PathBuf,
}

impl TestHome {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let home = temp.path().join("home");
        fs::create_dir_all(&home).expect("Failed to create home directory");
        let git_config = temp.path().join("gitconfig");
        Self {
            temp,
            home,
            git_config,
        }
    }

    /// Installer command confined to this home
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("mamba-githook-installer").unwrap();
        cmd.env("HOME", &self.home)
            .env("MAMBA_GITHOOK_HOME", &self.home)
            .env("GIT_CONFIG_GLOBAL", &self.git_config)
            .env("SHELL", "/bin/bash")
            .env_remove("MAMBA_GITHOOK_SOURCE")
            .env_remove("MAMBA_GITHOOK_LOG")
            .env_remove("XDG_CONFIG_HOME");
        cmd
    }

    pub fn target_dir(&self) -> PathBuf {
        self.home.join(".local/share/mamba-githook")
    }

    pub fn binary(&self) -> PathBuf {
        self.home.join(".local/bin/mamba-githook")
    }

    pub fn man_page(&self) -> PathBuf {
        self.home.join(".local/share/man/man1/mamba-githook.1")
    }

    pub fn backup_dir(&self) -> PathBuf {
        self.home.join(".mamba-githook-backup")
    }

    pub fn bashrc(&self) -> String {
        fs::read_to_string(self.home.join(".bashrc")).unwrap_or_default()
    }

    pub fn git_config_content(&self) -> String {
        fs::read_to_string(&self.git_config).unwrap_or_default()
    }

    /// Writes an asset tree to install with `--source`.
    pub fn write_source(&self, name: &str, binary: &str) -> PathBuf {
        let source = self.temp.path().join(name);
        write_file(&source.join("mamba-githook"), binary);
        write_file(&source.join("mamba-githook.1"), ".TH MAMBA-GITHOOK 1\n");
        write_file(&source.join("hooks/pre-commit"), "#!/bin/sh\nexit 0\n");
        write_file(&source.join("README"), "readme\n");
        source
    }
}

pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(path, content).expect("Failed to write file");
}

/// Permission bits of a file
#[cfg(unix)]
pub fn mode(path: &Path) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path).unwrap().permissions().mode() & 0o777
}
