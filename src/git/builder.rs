//! Builder for [`Git`] handles

use super::Git;
use crate::constants;
use std::path::PathBuf;

/// Builder for creating git handles
pub struct GitBuilder {
    path: PathBuf,
    program: String,
}

impl GitBuilder {
    /// Create a new builder bound to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            program: constants::git::DEFAULT_PROGRAM.to_string(),
        }
    }

    /// Set the executable to invoke instead of `git`
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Build the handle
    pub fn build(self) -> Git {
        Git::with_program(self.path, self.program)
    }
}
