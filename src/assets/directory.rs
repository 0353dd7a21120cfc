//! Asset tree read from a directory on disk

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, assets};

use super::{AssetEntry, AssetSource};

/// Asset tree rooted at a local directory
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}

impl AssetSource for DirectoryAssets {
    fn entries(&self) -> Result<Vec<AssetEntry>> {
        if !self.root.is_dir() {
            return Err(assets::not_found(self.root.display().to_string()));
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            let Some(path) = relative_path(&self.root, entry.path()) else {
                continue;
            };
            entries.push(if entry.file_type().is_dir() {
                AssetEntry::dir(path)
            } else {
                AssetEntry::file(path)
            });
        }
        Ok(entries)
    }

    fn open(&self, path: &str) -> Result<Box<dyn Read + '_>> {
        let full = self.root.join(path);
        if !full.is_file() {
            return Err(assets::not_found(path));
        }
        let file = File::open(&full).map_err(|e| assets::read_failed(path, e))?;
        Ok(Box::new(file))
    }

    fn describe(&self) -> String {
        self.root().display().to_string()
    }
}
