//! Lifecycle tests driving the real installer binary against a temp home

mod common;

use std::fs;

use common::TestHome;
use predicates::prelude::*;

const BUNDLED_BINARY: &str = include_str!("../assets/mamba-githook");

fn install(home: &TestHome) {
    home.cmd().args(["install", "-n"]).assert().success();
}

#[test]
fn test_install_non_interactive() {
    let home = TestHome::new();

    home.cmd()
        .args(["install", "--non-interactive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mamba-githook installed"));

    assert_eq!(fs::read_to_string(home.binary()).unwrap(), BUNDLED_BINARY);
    assert!(home.target_dir().join("hooks/pre-commit").is_file());
    assert!(home.target_dir().join("README.md").is_file());
    assert!(home.man_page().is_file());

    let bashrc = home.bashrc();
    assert!(bashrc.contains(&format!("$PATH:{}", home.home.join(".local/bin").display())));
    assert!(bashrc.contains("export MAMBA_GITHOOK_DIR="));

    let git_config = home.git_config_content();
    assert!(git_config.contains("hooksPath"));
    assert!(git_config.contains(&home.target_dir().join("hooks").display().to_string()));
}

#[cfg(unix)]
#[test]
fn test_install_sets_modes() {
    let home = TestHome::new();
    install(&home);

    assert_eq!(common::mode(&home.binary()), 0o755);
    assert_eq!(common::mode(&home.target_dir().join("hooks/pre-commit")), 0o755);
    assert_eq!(common::mode(&home.target_dir().join("hooks/commit-msg")), 0o755);
    assert_eq!(common::mode(&home.target_dir().join("README.md")), 0o644);
    assert_eq!(common::mode(&home.man_page()), 0o644);
}

#[test]
fn test_install_without_terminal_does_not_prompt() {
    let home = TestHome::new();

    home.cmd().arg("install").assert().success();

    assert!(home.binary().is_file());
}

#[test]
fn test_install_twice_keeps_shell_config_stable() {
    let home = TestHome::new();
    install(&home);
    let first = home.bashrc();

    install(&home);

    assert_eq!(home.bashrc(), first);
}

#[test]
fn test_install_from_source_directory() {
    let home = TestHome::new();
    let source = home.write_source("v2", "#!/bin/sh\necho v2\n");

    home.cmd()
        .args(["install", "-n", "--source"])
        .arg(&source)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(home.binary()).unwrap(),
        "#!/bin/sh\necho v2\n"
    );
    assert!(home.target_dir().join("README").is_file());
}

#[test]
fn test_install_from_missing_source_fails() {
    let home = TestHome::new();

    home.cmd()
        .args(["install", "-n", "--source"])
        .arg(home.temp.path().join("nope"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to copy files"));
}

#[test]
fn test_status_not_installed() {
    let home = TestHome::new();

    home.cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("not installed"));
}

#[test]
fn test_status_after_install_has_no_warnings() {
    let home = TestHome::new();
    install(&home);

    home.cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("installed"))
        .stdout(predicate::str::contains("Warnings").not());
}

#[test]
fn test_status_reports_missing_hooks_path() {
    let home = TestHome::new();
    install(&home);
    fs::write(&home.git_config, "").unwrap();

    home.cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("core.hooksPath is not set"));
}

#[test]
fn test_status_unreadable_shell_config_fails() {
    let home = TestHome::new();
    install(&home);
    fs::remove_file(home.home.join(".bashrc")).unwrap();

    home.cmd()
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains(".bashrc"));
}

#[test]
fn test_uninstall_removes_installation() {
    let home = TestHome::new();
    common::write_file(&home.home.join(".bashrc"), "alias g=git\n");
    install(&home);

    home.cmd().arg("uninstall").assert().success();

    assert!(!home.target_dir().exists());
    assert!(!home.binary().exists());
    assert!(!home.man_page().exists());
    assert_eq!(home.bashrc(), "alias g=git\n");
    assert!(!home.git_config_content().contains("hooksPath"));
}

#[test]
fn test_uninstall_without_hooks_path_fails() {
    let home = TestHome::new();
    install(&home);
    fs::write(&home.git_config, "").unwrap();

    home.cmd()
        .arg("uninstall")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("core.hooksPath is not set"));

    // Files were removed before the failing step.
    assert!(!home.target_dir().exists());
    assert!(!home.binary().exists());
}

#[test]
fn test_backup_uninstall_restore() {
    let home = TestHome::new();
    install(&home);
    let readme = fs::read(home.target_dir().join("README.md")).unwrap();

    home.cmd()
        .arg("backup")
        .assert()
        .success()
        .stdout(predicate::str::contains(".mamba-githook-backup"));
    assert!(home.backup_dir().join("target/hooks/pre-commit").is_file());
    assert!(home.backup_dir().join("mamba-githook").is_file());
    assert!(home.backup_dir().join("man/man1/mamba-githook.1").is_file());

    home.cmd().arg("uninstall").assert().success();
    home.cmd().arg("restore").assert().success();

    assert_eq!(fs::read(home.target_dir().join("README.md")).unwrap(), readme);
    assert_eq!(fs::read_to_string(home.binary()).unwrap(), BUNDLED_BINARY);
    assert!(home.man_page().is_file());
    #[cfg(unix)]
    assert_eq!(common::mode(&home.target_dir().join("hooks/pre-commit")), 0o755);
}

#[test]
fn test_backup_without_installation_fails() {
    let home = TestHome::new();

    home.cmd()
        .arg("backup")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to back up"));
}

#[test]
fn test_restore_without_backup_fails() {
    let home = TestHome::new();

    home.cmd()
        .arg("restore")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Backup directory does not exist"));
}

#[test]
fn test_upgrade_installs_new_version_and_keeps_backup() {
    let home = TestHome::new();
    install(&home);
    let source = home.write_source("v2", "#!/bin/sh\necho v2\n");

    home.cmd()
        .arg("upgrade")
        .arg("--source")
        .arg(&source)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(home.binary()).unwrap(),
        "#!/bin/sh\necho v2\n"
    );
    assert_eq!(
        fs::read_to_string(home.backup_dir().join("mamba-githook")).unwrap(),
        BUNDLED_BINARY
    );
    home.cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Warnings").not());
}

#[test]
fn test_upgrade_failure_restores_previous_version() {
    let home = TestHome::new();
    install(&home);

    home.cmd()
        .arg("upgrade")
        .arg("--source")
        .arg(home.temp.path().join("nope"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to copy files"));

    assert_eq!(fs::read_to_string(home.binary()).unwrap(), BUNDLED_BINARY);
    assert!(home.target_dir().join("hooks/pre-commit").is_file());
}

#[test]
fn test_home_flag_overrides_env() {
    let home = TestHome::new();
    let other = home.temp.path().join("other-home");
    fs::create_dir_all(&other).unwrap();

    home.cmd()
        .args(["install", "-n", "--home"])
        .arg(&other)
        .assert()
        .success();

    assert!(other.join(".local/bin/mamba-githook").is_file());
    assert!(!home.binary().exists());
}
