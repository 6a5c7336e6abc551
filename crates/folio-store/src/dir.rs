//! Directory-backed content store.
//!
//! Serves a static site directory from disk. Logical names are validated
//! before they ever touch the filesystem, so a store rooted at `site/` can
//! never read outside of it.

use std::fs;
use std::path::PathBuf;

use folio_types::error::Result;

use crate::{ContentStore, check_name};

/// A content store rooted at a directory on disk.
#[derive(Debug)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory this store serves.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

impl ContentStore for DirStore {
    fn fetch(&self, name: &str) -> Result<Vec<u8>> {
        check_name(name)?;
        let mut path = self.root.clone();
        for seg in name.split('/') {
            path.push(seg);
        }
        Ok(fs::read(path)?)
    }
}
