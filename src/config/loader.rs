//! Configuration file loading and saving

use crate::constants;
use crate::error::{GitError, Result};
use crate::git::{Git, GitBuilder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

fn default_program() -> String {
    constants::git::DEFAULT_PROGRAM.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Executable invoked for every operation
    #[serde(default = "default_program")]
    pub program: String,
    /// `git config` values applied to freshly initialized repositories
    #[serde(default)]
    pub settings: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            program: default_program(),
            settings: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| GitError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| GitError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let yaml = serde_yaml::to_string(self).map_err(|e| GitError::Config(e.to_string()))?;
        std::fs::write(path, format!("---\n{yaml}")).map_err(|source| GitError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.program.trim().is_empty() {
            return Err(GitError::Config("program cannot be empty".to_string()));
        }
        if let Some(key) = self.settings.keys().find(|k| k.trim().is_empty()) {
            return Err(GitError::Config(format!(
                "setting key cannot be empty (got {key:?})"
            )));
        }
        Ok(())
    }

    /// Git handle bound to `path` using the configured program
    pub fn repository(&self, path: impl Into<PathBuf>) -> Git {
        GitBuilder::new(path).with_program(&self.program).build()
    }
}
