//! Shell startup file backend

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, fs as fs_err};
use crate::paths::ShellKind;
use crate::transfer;

use super::{EnvValue, EnvVar, Environment};

/// Persists variables as lines in a shell rc file.
///
/// Removal drops every line mentioning a declared directory, including lines
/// the user wrote themselves.
#[derive(Debug, Clone)]
pub struct ShellRcEnvironment {
    config_file: PathBuf,
    shell: ShellKind,
}

impl ShellRcEnvironment {
    pub fn new(config_file: PathBuf, shell: ShellKind) -> Self {
        Self { config_file, shell }
    }

    #[cfg(test)]
    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// The line persisting `var` in this shell's syntax.
    pub fn render(&self, var: &EnvVar) -> String {
        match (&self.shell, &var.value) {
            (ShellKind::Fish, EnvValue::PathEntry(dir)) => {
                format!("set -gx {} ${} \"{}\"", var.name, var.name, dir.display())
            }
            (ShellKind::Fish, EnvValue::Value(value)) => {
                format!("set -gx {} \"{}\"", var.name, value)
            }
            (_, EnvValue::PathEntry(dir)) => {
                format!("export {}=\"${}:{}\"", var.name, var.name, dir.display())
            }
            (_, EnvValue::Value(value)) => format!("export {}=\"{}\"", var.name, value),
        }
    }

    fn read(&self) -> io::Result<String> {
        fs::read_to_string(&self.config_file)
    }

    /// Replaces the rc file content. A symlinked rc file is written through
    /// to the file it points at and the link itself is kept.
    fn write(&self, content: &str) -> Result<()> {
        let dest = resolve_link(&self.config_file)?;
        if dest != self.config_file {
            debug!(
                link = %self.config_file.display(),
                target = %dest.display(),
                "writing through symlink"
            );
        }
        let mode = existing_mode(&dest).unwrap_or(0o644);
        transfer::write_atomic(&dest, mode, &mut content.as_bytes())
    }
}

/// The file a symlinked `path` points at, or `path` itself.
///
/// A dangling link resolves to its target so the file gets created there.
fn resolve_link(path: &Path) -> Result<PathBuf> {
    let is_link = fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink());
    if !is_link {
        return Ok(path.to_path_buf());
    }

    match fs::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let link = fs::read_link(path).map_err(|e| fs_err::read_failed(path, e))?;
            Ok(match path.parent() {
                Some(parent) if link.is_relative() => parent.join(link),
                _ => link,
            })
        }
        Err(e) => Err(fs_err::read_failed(path, e)),
    }
}

#[cfg(unix)]
fn existing_mode(path: &Path) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path).ok().map(|m| m.permissions().mode() & 0o7777)
}

#[cfg(not(unix))]
fn existing_mode(_path: &Path) -> Option<u32> {
    None
}

impl Environment for ShellRcEnvironment {
    fn set_env(&self, vars: &[EnvVar]) -> Result<()> {
        let mut content = match self.read() {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(fs_err::read_failed(&self.config_file, e)),
        };

        let existing: Vec<String> = content.lines().map(str::to_string).collect();
        let mut appended = 0;
        for var in vars {
            let line = self.render(var);
            if existing.iter().any(|l| l.trim() == line) {
                debug!(line = %line, "already present");
                continue;
            }
            if !content.is_empty() && !content.ends_with('\n') {
                content.push('\n');
            }
            content.push_str(&line);
            content.push('\n');
            appended += 1;
        }

        if appended > 0 {
            self.write(&content)?;
        }
        debug!(file = %self.config_file.display(), appended, "updated shell config");
        Ok(())
    }

    fn unset_env(&self, vars: &[EnvVar]) -> Result<()> {
        let content = match self.read() {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(fs_err::read_failed(&self.config_file, e)),
        };

        let markers: Vec<String> = vars
            .iter()
            .map(EnvVar::marker)
            .filter(|m| !m.is_empty())
            .collect();

        let kept: Vec<&str> = content
            .split('\n')
            .filter(|line| !markers.iter().any(|m| line.contains(m.as_str())))
            .collect();
        let updated = kept.join("\n");

        if updated != content {
            self.write(&updated)?;
        }
        Ok(())
    }

    fn check_env(&self, vars: &[EnvVar]) -> Result<Vec<String>> {
        let content = self
            .read()
            .map_err(|e| fs_err::read_failed(&self.config_file, e))?;

        let mut warnings = Vec::new();
        for var in vars {
            let present = match &var.value {
                EnvValue::PathEntry(dir) => content.contains(&dir.display().to_string()),
                EnvValue::Value(_) => content.lines().any(|l| l.trim() == self.render(var)),
            };
            if !present {
                let warning = match &var.value {
                    EnvValue::PathEntry(dir) => format!(
                        "{} is not added to {} in {}",
                        dir.display(),
                        var.name,
                        self.config_file.display()
                    ),
                    EnvValue::Value(_) => format!(
                        "{} is not set correctly in {}",
                        var.name,
                        self.config_file.display()
                    ),
                };
                warnings.push(warning);
            }
        }
        Ok(warnings)
    }
}
