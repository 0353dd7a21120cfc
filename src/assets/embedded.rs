//! Asset tree compiled into the binary by `build.rs`

use std::io::{Cursor, Read};

use crate::error::{Result, assets};

use super::{AssetEntry, AssetSource};

/// Entry of the generated table
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedEntry {
    pub path: &'static str,
    /// `None` for directories
    pub contents: Option<&'static [u8]>,
}

include!(concat!(env!("OUT_DIR"), "/embedded_assets.rs"));

/// The tree bundled from the crate's `assets/` directory
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedAssets {
    table: &'static [EmbeddedEntry],
}

impl EmbeddedAssets {
    pub fn new() -> Self {
        Self { table: EMBEDDED }
    }

    #[cfg(test)]
    pub fn from_table(table: &'static [EmbeddedEntry]) -> Self {
        Self { table }
    }
}

impl Default for EmbeddedAssets {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetSource for EmbeddedAssets {
    fn entries(&self) -> Result<Vec<AssetEntry>> {
        Ok(self
            .table
            .iter()
            .map(|e| match e.contents {
                Some(_) => AssetEntry::file(e.path),
                None => AssetEntry::dir(e.path),
            })
            .collect())
    }

    fn open(&self, path: &str) -> Result<Box<dyn Read + '_>> {
        let bytes = self
            .table
            .iter()
            .find(|e| e.path == path)
            .and_then(|e| e.contents)
            .ok_or_else(|| assets::not_found(path))?;
        Ok(Box::new(Cursor::new(bytes)))
    }

    fn describe(&self) -> String {
        "embedded assets".to_string()
    }
}
