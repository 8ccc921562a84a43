//! File system utility functions

use crate::error::{GitError, Result};
use std::fmt;
use std::path::{Path, PathBuf};

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> GitError + '_ {
    move |source| GitError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Ensure a directory exists, creating it and any parents if necessary
pub fn ensure_directory(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::create_dir_all(path).map_err(io_error(path))
}

/// Recursively remove a directory if it is present
pub fn remove_tree_if_exists(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        std::fs::remove_dir_all(path).map_err(io_error(path))?;
    }
    Ok(())
}

/// A directory that is created when the handle is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dir {
    path: PathBuf,
}

impl Dir {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        ensure_directory(&path)?;
        Ok(Self { path })
    }

    /// Nested directory, created on demand
    pub fn subdir(&self, part: impl AsRef<Path>) -> Result<Dir> {
        Dir::new(self.path.join(part))
    }

    /// Path below this directory; nothing is created
    pub fn subpath(&self, part: impl AsRef<Path>) -> PathBuf {
        self.path.join(part)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
