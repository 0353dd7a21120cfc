//! Read-only asset trees the installer copies into place
//!
//! A tree is a flat list of entries with forward-slash relative paths, in
//! depth-first order with every directory listed before its children.
//! Two sources exist:
//! - [`EmbeddedAssets`]: the tree compiled into the installer from `assets/`
//! - [`DirectoryAssets`]: a tree read from disk (`--source`)

mod directory;
mod embedded;

use std::io::Read;

use crate::error::Result;

pub use directory::DirectoryAssets;
pub use embedded::EmbeddedAssets;

/// One file or directory of an asset tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    /// Path relative to the tree root, `/`-separated
    pub path: String,
    pub is_dir: bool,
}

impl AssetEntry {
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_dir: false,
        }
    }

    pub fn dir(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_dir: true,
        }
    }
}

/// Provider of the distributable file tree
pub trait AssetSource {
    /// All entries under the root, parents before children
    fn entries(&self) -> Result<Vec<AssetEntry>>;

    /// Opens a file entry for reading
    fn open(&self, path: &str) -> Result<Box<dyn Read + '_>>;

    /// Human-readable origin, used in logs
    fn describe(&self) -> String;
}
