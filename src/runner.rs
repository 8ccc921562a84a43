//! Synchronous process execution with captured output

use crate::error::{GitError, Result};
use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

/// Captured result of a finished child process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    /// Exit code, or -1 when the child was terminated by a signal
    pub code: i32,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }

    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }

    /// First line of stdout, trimmed
    pub fn first_line(&self) -> String {
        self.stdout_lossy()
            .lines()
            .next()
            .unwrap_or_default()
            .trim()
            .to_string()
    }
}

/// Run `program` with `args` in `cwd` and wait for it to finish
///
/// A non-zero exit code is not an error here; only a failure to start the
/// process is.
pub fn run<I, S>(cwd: &Path, program: &str, args: I) -> Result<ProcessOutput>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .output()
        .map_err(|source| GitError::Spawn {
            program: program.to_string(),
            cwd: cwd.to_path_buf(),
            source,
        })?;

    Ok(ProcessOutput {
        stdout: output.stdout,
        stderr: output.stderr,
        code: output.status.code().unwrap_or(-1),
    })
}
