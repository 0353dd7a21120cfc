//! Windows user environment backend (`setx` / `reg`)

use std::process::Command;

use tracing::debug;

use crate::error::{Result, env};

use super::{EnvValue, EnvVar, Environment};

const USER_ENV_KEY: &str = r"HKCU\Environment";

/// Persists variables as user environment variables.
///
/// `PATH` is read back from the registry before it is changed so that only
/// the installer's own entry is added or removed.
#[derive(Debug, Clone, Default)]
pub struct WindowsEnvironment;

impl WindowsEnvironment {
    pub fn new() -> Self {
        Self
    }

    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        let label = format!("{} {}", program, args.join(" "));
        debug!(command = %label, "running");

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| env::command_failed(&label, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(env::command_failed(&label, stderr.trim()));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Current value of a user variable; `None` when it is not defined.
    fn query(&self, name: &str) -> Result<Option<String>> {
        let output = Command::new("reg")
            .args(["query", USER_ENV_KEY, "/v", name])
            .output()
            .map_err(|e| env::command_failed("reg query", e))?;

        if !output.status.success() {
            return Ok(None);
        }
        Ok(parse_reg_query(&String::from_utf8_lossy(&output.stdout), name))
    }

    fn setx(&self, name: &str, value: &str) -> Result<()> {
        self.run("setx", &[name, value]).map(|_| ())
    }

    fn delete(&self, name: &str) -> Result<()> {
        self.run("reg", &["delete", USER_ENV_KEY, "/F", "/V", name])
            .map(|_| ())
    }
}

impl Environment for WindowsEnvironment {
    fn set_env(&self, vars: &[EnvVar]) -> Result<()> {
        for var in vars {
            match &var.value {
                EnvValue::PathEntry(dir) => {
                    let current = self.query(&var.name)?.unwrap_or_default();
                    let entry = dir.display().to_string();
                    match append_path_entry(&current, &entry) {
                        Some(updated) => self.setx(&var.name, &updated)?,
                        None => debug!(name = %var.name, entry = %entry, "already present"),
                    }
                }
                EnvValue::Value(value) => self.setx(&var.name, value)?,
            }
        }
        Ok(())
    }

    fn unset_env(&self, vars: &[EnvVar]) -> Result<()> {
        for var in vars {
            match &var.value {
                EnvValue::PathEntry(dir) => {
                    let Some(current) = self.query(&var.name)? else {
                        continue;
                    };
                    let entry = dir.display().to_string();
                    if let Some(updated) = remove_path_entry(&current, &entry) {
                        if updated.is_empty() {
                            self.delete(&var.name)?;
                        } else {
                            self.setx(&var.name, &updated)?;
                        }
                    }
                }
                EnvValue::Value(_) => self.delete(&var.name)?,
            }
        }
        Ok(())
    }

    fn check_env(&self, vars: &[EnvVar]) -> Result<Vec<String>> {
        let mut warnings = Vec::new();
        for var in vars {
            let current = self.query(&var.name)?;
            match &var.value {
                EnvValue::PathEntry(dir) => {
                    let entry = dir.display().to_string();
                    let present = current
                        .as_deref()
                        .is_some_and(|list| path_list_contains(list, &entry));
                    if !present {
                        warnings.push(format!("{entry} is not added to user {}", var.name));
                    }
                }
                EnvValue::Value(value) => {
                    if current.as_deref() != Some(value.as_str()) {
                        warnings.push(format!("{} is not set correctly", var.name));
                    }
                }
            }
        }
        Ok(warnings)
    }
}

/// Extracts a value from `reg query <key> /v <name>` output.
///
/// Lines look like `    Path    REG_EXPAND_SZ    C:\bin;C:\tools`.
fn parse_reg_query(output: &str, name: &str) -> Option<String> {
    output.lines().find_map(|line| {
        let line = line.trim();
        let rest = line.get(..name.len())?;
        if !rest.eq_ignore_ascii_case(name) {
            return None;
        }
        let mut parts = line[name.len()..].trim_start().splitn(2, char::is_whitespace);
        let kind = parts.next()?;
        if !kind.starts_with("REG_") {
            return None;
        }
        Some(parts.next().unwrap_or("").trim().to_string())
    })
}

fn same_entry(a: &str, b: &str) -> bool {
    a.trim_end_matches('\\')
        .eq_ignore_ascii_case(b.trim_end_matches('\\'))
}

fn path_list_contains(list: &str, entry: &str) -> bool {
    list.split(';').any(|e| same_entry(e, entry))
}

/// New `PATH` value with `entry` appended; `None` if it is already listed.
fn append_path_entry(list: &str, entry: &str) -> Option<String> {
    if path_list_contains(list, entry) {
        return None;
    }
    let trimmed = list.trim_end_matches(';');
    if trimmed.is_empty() {
        Some(entry.to_string())
    } else {
        Some(format!("{trimmed};{entry}"))
    }
}

/// New `PATH` value without `entry`; `None` if it was not listed.
fn remove_path_entry(list: &str, entry: &str) -> Option<String> {
    if !path_list_contains(list, entry) {
        return None;
    }
    let kept: Vec<&str> = list
        .split(';')
        .filter(|e| !e.is_empty() && !same_entry(e, entry))
        .collect();
    Some(kept.join(";"))
}
