//! Where each asset goes and which mode it gets

use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::assets::AssetEntry;
use crate::error::{Result, fs as fs_err};
use crate::paths::{BINARY_NAME, HOOKS_DIR, InstallationContext, MAN_PAGE_NAME};

use super::set_mode;

pub const EXECUTABLE_MODE: u32 = 0o755;
pub const REGULAR_MODE: u32 = 0o644;
pub const DIR_MODE: u32 = 0o755;

/// Destination of one asset entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// Not installed on this platform
    Skip,
    Dir(PathBuf),
    File { dest: PathBuf, mode: u32 },
}

/// The binary and everything below `hooks/` are executable; nothing else is.
pub fn is_executable_path(rel: &str) -> bool {
    rel == BINARY_NAME
        || rel
            .strip_prefix(HOOKS_DIR)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Maps an asset entry to its installed location.
pub fn placement(ctx: &InstallationContext, entry: &AssetEntry) -> Placement {
    let rel = entry.path.as_str();

    if entry.is_dir {
        return Placement::Dir(ctx.target_dir().join(rel));
    }

    match rel {
        BINARY_NAME => Placement::File {
            dest: ctx.binary_path(),
            mode: EXECUTABLE_MODE,
        },
        MAN_PAGE_NAME => match ctx.man_page_path() {
            Some(dest) => Placement::File {
                dest,
                mode: REGULAR_MODE,
            },
            None => Placement::Skip,
        },
        _ => Placement::File {
            dest: ctx.target_dir().join(rel),
            mode: if is_executable_path(rel) {
                EXECUTABLE_MODE
            } else {
                REGULAR_MODE
            },
        },
    }
}

/// Forward-slash form of a relative path, as used by asset entries.
fn asset_key(rel: &Path) -> String {
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Re-asserts modes below an installed target tree: directories traversable,
/// files executable exactly when [`is_executable_path`] says so for their
/// path relative to `root`.
pub fn set_permissions(root: &Path) -> Result<()> {
    for entry in WalkDir::new(root) {
        let entry = entry?;
        let path = entry.path();

        let mode = if entry.file_type().is_dir() {
            DIR_MODE
        } else {
            let rel = path
                .strip_prefix(root)
                .map_err(|e| fs_err::read_failed(path, e))?;
            if is_executable_path(&asset_key(rel)) {
                EXECUTABLE_MODE
            } else {
                REGULAR_MODE
            }
        };
        set_mode(path, mode)?;
    }
    Ok(())
}
