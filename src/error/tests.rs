//! Error type tests
//!
//! Tests for InstallerError and its conversions.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::error::Error;
use std::path::Path;

use miette::Diagnostic;

use super::{InstallerError, Result, StepContext};
use crate::error::{assets, backup, config, env, fs, hooks};

macro_rules! test_error_contains {
    ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let err = $err;
            let error_string = err.to_string();
            $(
                assert!(error_string.contains($contains),
                    "Error message should contain '{}', got: {}",
                    $contains,
                    error_string
                );
            )+
        }
    };
}

test_error_contains!(
    test_unsupported_os,
    config::unsupported_os("plan9"),
    "Unsupported operating system",
    "plan9"
);

test_error_contains!(
    test_home_not_found,
    InstallerError::HomeDirNotFound,
    "home directory"
);

test_error_contains!(
    test_file_write_failed,
    fs::write_failed(Path::new("/tmp/x"), "disk full"),
    "Failed to write file",
    "/tmp/x",
    "disk full"
);

test_error_contains!(
    test_rename_failed,
    fs::rename_failed(Path::new("/a"), Path::new("/b"), "cross-device link"),
    "/a",
    "/b",
    "cross-device"
);

test_error_contains!(
    test_backup_not_found,
    backup::not_found(Path::new("/home/u/.mamba-githook-backup")),
    "Backup directory does not exist"
);

test_error_contains!(
    test_backup_source_missing,
    backup::source_missing(Path::new("/home/u/.local/bin/mamba-githook")),
    "Nothing to back up"
);

test_error_contains!(
    test_asset_not_found,
    assets::not_found("hooks/pre-commit"),
    "Bundled file not found",
    "hooks/pre-commit"
);

test_error_contains!(
    test_asset_read_failed,
    assets::read_failed("hooks/pre-commit", "permission denied"),
    "Failed to read asset file",
    "hooks/pre-commit",
    "permission denied"
);

test_error_contains!(
    test_env_command_failed,
    env::command_failed("setx PATH", "exit status: 1"),
    "setx PATH",
    "exit status: 1"
);

test_error_contains!(
    test_hooks_not_set,
    InstallerError::HooksPathNotSet,
    "core.hooksPath is not set"
);

#[test]
fn test_error_code() {
    let err = config::unsupported_os("plan9");
    assert_eq!(
        err.code().map(|c| c.to_string()),
        Some("mamba_githook::config::unsupported_os".to_string())
    );
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: InstallerError = io_err.into();
    assert!(matches!(err, InstallerError::IoError { .. }));
}

#[test]
fn test_git_error_conversion() {
    let git_err = git2::Error::from_str("config locked");
    let err: InstallerError = git_err.into();
    assert!(matches!(err, InstallerError::GitConfigFailed { .. }));
    assert!(err.to_string().contains("config locked"));
}

#[test]
fn test_git_config_failed_constructor() {
    let err = hooks::git_config_failed("bad key");
    assert!(matches!(err, InstallerError::GitConfigFailed { .. }));
}

#[test]
fn test_step_wraps_source() {
    let result: Result<()> = Err(std::io::Error::other("boom").into());
    let err = result.step("copy project files").unwrap_err();

    assert!(err.to_string().contains("Failed to copy project files"));
    assert!(err.to_string().contains("boom"));
    assert!(err.source().is_some());
    assert!(matches!(err.root_cause(), InstallerError::IoError { .. }));
}

#[test]
fn test_root_cause_through_nested_steps() {
    let result: Result<()> = Err(InstallerError::HooksPathNotSet);
    let err = result
        .step("unset Git hooks path")
        .step("uninstall previous version")
        .unwrap_err();

    assert!(matches!(err.root_cause(), InstallerError::HooksPathNotSet));
}
