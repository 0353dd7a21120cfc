//! File transfer with atomic single-file replacement
//!
//! Every file lands through [`write_atomic`]: content goes to a temporary
//! file in the destination directory, gets its mode, and is renamed over the
//! destination. A failure before the rename deletes the temporary file and
//! leaves the previous destination untouched.
//!
//! Trees are copied sequentially, parents before children.

mod rules;

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::assets::AssetSource;
use crate::error::{Result, fs as fs_err};
use crate::paths::InstallationContext;

pub use rules::{
    DIR_MODE, EXECUTABLE_MODE, Placement, REGULAR_MODE, placement, set_permissions,
};

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| fs_err::create_dir_failed(parent, e))?;
    }
    Ok(())
}

/// Writes everything `reader` yields to `dest` with `mode`, atomically.
pub fn write_atomic(dest: &Path, mode: u32, reader: &mut dyn Read) -> Result<()> {
    ensure_parent_dir(dest)?;
    let parent = dest.parent().unwrap_or_else(|| Path::new("."));

    let mut tmp = tempfile::Builder::new()
        .prefix(".tmp-")
        .tempfile_in(parent)
        .map_err(|e| fs_err::write_failed(dest, e))?;

    // Dropping `tmp` on any early return removes the temporary file.
    io::copy(reader, &mut tmp).map_err(|e| fs_err::write_failed(dest, e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| fs_err::write_failed(dest, e))?;
    set_mode(tmp.path(), mode)?;

    tmp.persist(dest)
        .map_err(|e| fs_err::rename_failed(e.file.path(), dest, e.error))?;
    Ok(())
}

/// Copies one file atomically, keeping the source's mode.
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    let mut file = File::open(src).map_err(|e| fs_err::read_failed(src, e))?;
    let mode = file_mode(&file).map_err(|e| fs_err::read_failed(src, e))?;
    write_atomic(dst, mode, &mut file)
}

/// Copies a directory tree, recreating each directory before its files.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| fs_err::read_failed(entry.path(), e))?;
        let target = dst.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| fs_err::create_dir_failed(&target, e))?;
        } else {
            copy_file(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Materializes an asset tree according to the placement rules.
///
/// Returns the number of files written.
pub fn copy_assets(ctx: &InstallationContext, source: &dyn AssetSource) -> Result<usize> {
    let mut written = 0;
    for entry in source.entries()? {
        match placement(ctx, &entry) {
            Placement::Skip => {
                debug!(path = %entry.path, "skipping");
            }
            Placement::Dir(dir) => {
                fs::create_dir_all(&dir).map_err(|e| fs_err::create_dir_failed(&dir, e))?;
                set_mode(&dir, DIR_MODE)?;
            }
            Placement::File { dest, mode } => {
                let mut reader = source.open(&entry.path)?;
                write_atomic(&dest, mode, &mut reader)?;
                debug!(
                    path = %entry.path,
                    dest = %dest.display(),
                    mode = %format!("{mode:o}"),
                    "placed"
                );
                written += 1;
            }
        }
    }
    Ok(written)
}

/// Renames `from` to `to`, copying and deleting when a rename is impossible
/// (for example across file systems).
pub fn move_path(from: &Path, to: &Path) -> Result<()> {
    let Err(rename_err) = fs::rename(from, to) else {
        return Ok(());
    };
    debug!(
        from = %from.display(),
        to = %to.display(),
        error = %rename_err,
        "rename failed, copying"
    );

    if from.is_dir() {
        copy_tree(from, to)?;
        fs::remove_dir_all(from).map_err(|e| fs_err::remove_failed(from, e))?;
    } else if from.is_file() {
        copy_file(from, to)?;
        fs::remove_file(from).map_err(|e| fs_err::remove_failed(from, e))?;
    } else {
        return Err(fs_err::rename_failed(from, to, rename_err));
    }
    Ok(())
}

/// Removes a directory tree; a missing directory is not an error.
pub fn remove_dir_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(fs_err::remove_failed(path, e)),
    }
}

/// Removes a file; a missing file is not an error.
pub fn remove_file_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(fs_err::remove_failed(path, e)),
    }
}

#[cfg(unix)]
pub(crate) fn set_mode(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
        .map_err(|e| fs_err::permissions_failed(path, e))
}

#[cfg(not(unix))]
pub(crate) fn set_mode(_path: &Path, _mode: u32) -> Result<()> {
    // No mode bits outside unix
    Ok(())
}

#[cfg(unix)]
fn file_mode(file: &File) -> io::Result<u32> {
    use std::os::unix::fs::PermissionsExt;
    Ok(file.metadata()?.permissions().mode() & 0o7777)
}

#[cfg(not(unix))]
fn file_mode(_file: &File) -> io::Result<u32> {
    Ok(rules::REGULAR_MODE)
}

#[cfg(test)]
pub(crate) fn mode_of(path: &Path) -> u32 {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::metadata(path).unwrap().permissions().mode() & 0o777
    }
    #[cfg(not(unix))]
    {
        let _ = path;
        rules::REGULAR_MODE
    }
}
