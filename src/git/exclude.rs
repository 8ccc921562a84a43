//! Local ignore patterns kept in `.git/info/exclude`
//!
//! Patterns are held in memory and only written back by [`Exclude::commit`],
//! and only when something changed since the last read or commit.

use crate::error::{GitError, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exclude {
    path: PathBuf,
    patterns: Vec<String>,
    dirty: bool,
}

impl Exclude {
    /// Load patterns from `path`; a missing file yields no patterns.
    /// Blank lines and `#` comments are dropped.
    pub fn read(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut patterns: Vec<String> = Vec::new();
        if path.is_file() {
            let content = std::fs::read_to_string(&path).map_err(|source| GitError::Io {
                path: path.clone(),
                source,
            })?;
            for line in content.lines() {
                let line = line.trim_end();
                if line.is_empty() || line.trim_start().starts_with('#') {
                    continue;
                }
                if !patterns.iter().any(|p| p == line) {
                    patterns.push(line.to_string());
                }
            }
        }
        Ok(Self {
            path,
            patterns,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn all(&self) -> &[String] {
        &self.patterns
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.patterns.iter().any(|p| p == pattern)
    }

    /// Add patterns not yet present; returns whether anything changed
    pub fn add<I, S>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut changed = false;
        for value in values {
            let value = value.as_ref();
            if !self.contains(value) {
                self.patterns.push(value.to_string());
                changed = true;
            }
        }
        self.dirty |= changed;
        changed
    }

    /// Remove patterns that are present; returns whether anything changed
    pub fn rm<I, S>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.patterns.len();
        for value in values {
            let value = value.as_ref();
            self.patterns.retain(|p| p != value);
        }
        let changed = self.patterns.len() != before;
        self.dirty |= changed;
        changed
    }

    pub fn clear(&mut self) {
        self.patterns.clear();
        self.dirty = true;
    }

    /// Write patterns back to disk if they changed; returns whether a write
    /// happened
    pub fn commit(&mut self) -> Result<bool> {
        if !self.dirty {
            return Ok(false);
        }
        let io_error = |source| GitError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        let mut content = self.patterns.join("\n");
        content.push('\n');
        std::fs::write(&self.path, content).map_err(io_error)?;
        self.dirty = false;
        Ok(true)
    }
}
