//! Error types shared by every git operation

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GitError>;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("failed to execute '{program}' in {}: {source}", cwd.display())]
    Spawn {
        program: String,
        cwd: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("status query failed with exit code {code}\noutput:\n{stdout}\nerr:\n{stderr}")]
    StatusFailed {
        code: i32,
        stdout: String,
        stderr: String,
    },

    #[error("cannot read repository status @ {}", path.display())]
    StatusUnreadable { path: PathBuf },

    #[error("cannot initialize repository @ {} (exit code {code}): {stderr}", path.display())]
    InitFailed {
        path: PathBuf,
        code: i32,
        stderr: String,
    },

    #[error("'{command}' failed with exit code {code}: {stderr}")]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("malformed status record {record:?}: {reason}")]
    MalformedRecord { record: String, reason: String },

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl GitError {
    pub(crate) fn malformed(record: &[u8], reason: impl Into<String>) -> Self {
        GitError::MalformedRecord {
            record: String::from_utf8_lossy(record).into_owned(),
            reason: reason.into(),
        }
    }

    /// Exit code reported by the tool, if this error carries one
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            GitError::StatusFailed { code, .. }
            | GitError::InitFailed { code, .. }
            | GitError::CommandFailed { code, .. } => Some(*code),
            _ => None,
        }
    }
}
